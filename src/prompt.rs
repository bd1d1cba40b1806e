//! @ai:module:intent Interactive collection of search parameters
//! @ai:module:layer presentation
//! @ai:module:public_api Prompter
//! @ai:module:stateless false

use crate::error::InputError;
use crate::input::{
    parse_count, parse_query, parse_result_type, parse_until, SearchParameters,
    TWEET_COUNT_CEILING,
};
use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

/// @ai:intent Asks questions on `output` and reads answers from `input`
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// @ai:intent Ask all four questions in order
    /// @ai:effects io
    pub fn collect_parameters(&mut self, today: NaiveDate) -> Result<SearchParameters> {
        let query = self.ask_until_valid(
            "what keywords you want to search for: ",
            "(PLEASE ENTER YOUR KEYWORDS) what keywords you want to search for: ",
            parse_query,
        )?;

        let count_prompt = format!(
            "how many tweets you want to search for (<{}): ",
            TWEET_COUNT_CEILING
        );
        let count_retry = format!("(PLEASE ENTER A NUMBER) {}", count_prompt);
        let count = self.ask_until_valid(&count_prompt, &count_retry, parse_count)?;

        let until = self.ask_until_valid(
            "tweets created before the given date, formatted as YYYY-MM-DD \
             (the search index has a 7-day limit, press enter for today): ",
            "(PLEASE ENTER A DATE AS YYYY-MM-DD OR PRESS ENTER) tweets created before: ",
            |raw| parse_until(raw, today),
        )?;

        let result_type = self.ask_until_valid(
            "what type of search results you prefer: mixed, recent or popular \
             (press enter for mixed): ",
            "(PLEASE ENTER mixed, recent OR popular) result type: ",
            parse_result_type,
        )?;

        Ok(SearchParameters::new(query, count, until, result_type)?)
    }

    /// @ai:intent Repeat a question until `parse` accepts the answer
    /// @ai:effects io
    fn ask_until_valid<T, F>(&mut self, prompt: &str, retry: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> Result<T, InputError>,
    {
        let mut question = prompt;

        loop {
            let answer = self.ask(question)?;

            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!("Rejected input: {}", e);
                    question = retry;
                }
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if read == 0 {
            bail!("input closed before all search parameters were entered");
        }

        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ResultType;
    use std::io::Cursor;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 4).unwrap()
    }

    #[test]
    fn test_defaults_for_optional_answers() {
        let input = Cursor::new("rust\n10\n\n\n");
        let mut output = Vec::new();

        let params = Prompter::new(input, &mut output)
            .collect_parameters(today())
            .unwrap();

        assert_eq!(params.query(), "rust");
        assert_eq!(params.count(), 10);
        assert_eq!(params.until(), today());
        assert_eq!(params.result_type(), ResultType::Mixed);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let input = Cursor::new("\n  \nrust\nabc\n150\n25\n07/01/2024\n2024-07-01\nnewest\npopular\n");
        let mut output = Vec::new();

        let params = Prompter::new(input, &mut output)
            .collect_parameters(today())
            .unwrap();

        assert_eq!(params.count(), 25);
        assert_eq!(params.until(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert_eq!(params.result_type(), ResultType::Popular);

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("(PLEASE ENTER YOUR KEYWORDS)").count(), 2);
        assert_eq!(transcript.matches("(PLEASE ENTER A NUMBER)").count(), 2);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let input = Cursor::new("rust\n");
        let mut output = Vec::new();

        assert!(Prompter::new(input, &mut output)
            .collect_parameters(today())
            .is_err());
    }
}
