use std::io::{BufRead, Write};

use crate::{errors::Error, models::request_params::HistoryRequest};

pub const SYMBOL_PROMPT: &str = "Enter the stock symbol (e.g., AAPL): ";
pub const PERIOD_PROMPT: &str = "Enter the period (e.g., '1y', '5y', 'max'): ";
pub const INTERVAL_PROMPT: &str = "Enter the interval (e.g., '1h' for hourly, '1d' for daily, '1wk' for weekly, '1mo' for monthly, '1y' for yearly): ";

/// Writes `message`, then reads one line from `reader`.
///
/// Only the line terminator is removed; leading, trailing and inner
/// whitespace is part of the answer.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<String, Error> {
    write!(writer, "{message}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(Error::Input(format!(
            "end of input before answering {:?}",
            message.trim_end()
        )));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Builds the request from whatever came on the command line, prompting for
/// the rest in symbol, period, interval order.
pub fn collect_request<R: BufRead, W: Write>(
    symbol: Option<String>,
    period: Option<String>,
    interval: Option<String>,
    reader: &mut R,
    writer: &mut W,
) -> Result<HistoryRequest, Error> {
    let mut ask = |value: Option<String>, message: &str| match value {
        Some(value) => Ok(value),
        None => prompt(reader, writer, message),
    };

    let symbol = ask(symbol, SYMBOL_PROMPT)?;
    let period = ask(period, PERIOD_PROMPT)?;
    let interval = ask(interval, INTERVAL_PROMPT)?;

    Ok(HistoryRequest::new(symbol, period, interval))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_prompts_in_order() {
        let mut input = Cursor::new("AAPL\n1y\n1d\n");
        let mut output = Vec::new();

        let request = collect_request(None, None, None, &mut input, &mut output).unwrap();

        assert_eq!(request, HistoryRequest::new("AAPL", "1y", "1d"));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{SYMBOL_PROMPT}{PERIOD_PROMPT}{INTERVAL_PROMPT}")
        );
    }

    #[test]
    fn test_only_missing_values_are_prompted() {
        let mut input = Cursor::new("1wk\n");
        let mut output = Vec::new();

        let request = collect_request(
            Some("MSFT".to_string()),
            Some("5y".to_string()),
            None,
            &mut input,
            &mut output,
        )
        .unwrap();

        assert_eq!(request, HistoryRequest::new("MSFT", "5y", "1wk"));
        assert_eq!(String::from_utf8(output).unwrap(), INTERVAL_PROMPT);
    }

    #[test]
    fn test_answers_are_not_normalized() {
        let mut input = Cursor::new(" aapl \r\n1y\n1d");
        let mut output = Vec::new();

        let request = collect_request(None, None, None, &mut input, &mut output).unwrap();

        assert_eq!(request.symbol, " aapl ");
        // last line without a terminator is still an answer
        assert_eq!(request.interval, "1d");
    }

    #[test]
    fn test_eof_is_an_input_error() {
        let mut input = Cursor::new("AAPL\n");
        let mut output = Vec::new();

        let err = collect_request(None, None, None, &mut input, &mut output).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_empty_line_is_a_valid_answer() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();

        let answer = prompt(&mut input, &mut output, SYMBOL_PROMPT).unwrap();
        assert_eq!(answer, "");
    }
}
