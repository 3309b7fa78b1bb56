//! JSON output for the CLI
//!
//! - One JSON object per command on stdout
//! - UTF-8 only
//! - Logs go to stderr and never mix with responses

use std::io::{self, Write};

use serde_json::{json, Value};

use super::errors::{CliError, CliResult};

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_line(&mut io::stdout(), &ok_response(data))
}

/// Write an error response to stdout
pub fn write_error(error: &CliError) -> CliResult<()> {
    write_line(&mut io::stdout(), &error_response(error))
}

fn ok_response(data: Value) -> Value {
    json!({
        "status": "ok",
        "data": data
    })
}

fn error_response(error: &CliError) -> Value {
    let mut response = json!({
        "status": "error",
        "code": error.code_str(),
        "message": error.message()
    });
    if let Some(cause) = error.cause() {
        response["cause"] = json!(cause);
    }
    response
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::ServiceError;

    #[test]
    fn test_ok_response_shape() {
        let mut buffer = Vec::new();
        write_line(&mut buffer, &ok_response(json!({"id": 1}))).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["status"], "ok");
        assert_eq!(parsed["data"]["id"], 1);
    }

    #[test]
    fn test_error_response_shape() {
        let plain = error_response(&CliError::config_error("missing data_dir"));
        assert_eq!(plain["status"], "error");
        assert_eq!(plain["code"], "SHOP_CLI_CONFIG_ERROR");
        assert!(plain.get("cause").is_none());

        let failed = error_response(&ServiceError::DuplicateEntry("Cupcakes".into()).into());
        assert_eq!(failed["code"], "SHOP_CLI_COMMAND_FAILED");
        assert_eq!(failed["cause"], "SHOP_DUPLICATE_ENTRY");
    }
}
