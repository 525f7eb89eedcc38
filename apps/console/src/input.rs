//! # Interactive Input
//!
//! The prompt/read layer for the checkout session.
//!
//! ## Prompt Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Fixed sequence, one line read per prompt:                          │
//! │                                                                     │
//! │   1. Enter laptop name:                  (text)                     │
//! │   2. Enter laptop price:                 (decimal)                  │
//! │   3. Enter laptop brand:                 (text)                     │
//! │   4. Enter mobile name:                  (text)                     │
//! │   5. Enter mobile price:                 (decimal)                  │
//! │   6. Enter mobile manufacturer:          (text)                     │
//! │   7. Enter regular customer name:        (text)                     │
//! │   8. Enter regular customer address:     (text)                     │
//! │   9. Enter corporate customer name:      (text)                     │
//! │  10. Enter corporate customer company name: (text)                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function is generic over `BufRead`/`Write` so tests can script
//! a whole session with `Cursor` and a `Vec<u8>`.

use std::io::{BufRead, ErrorKind, Write};

use voltshop_core::{CorporateCustomer, Laptop, Mobile, Money, RegularCustomer};

use crate::error::ConsoleResult;

/// Everything the checkout session reads from the operator.
#[derive(Debug)]
pub struct CheckoutInput {
    pub laptop: Laptop,
    pub mobile: Mobile,
    pub regular: RegularCustomer,
    pub corporate: CorporateCustomer,
}

/// Reads the full fixed prompt sequence and builds the domain values.
pub fn read_checkout<R, W>(input: &mut R, output: &mut W) -> ConsoleResult<CheckoutInput>
where
    R: BufRead,
    W: Write,
{
    let laptop_name = prompt_line(input, output, "Enter laptop name: ")?;
    let laptop_price = prompt_amount(input, output, "Enter laptop price: ")?;
    let laptop_brand = prompt_line(input, output, "Enter laptop brand: ")?;

    let mobile_name = prompt_line(input, output, "Enter mobile name: ")?;
    let mobile_price = prompt_amount(input, output, "Enter mobile price: ")?;
    let mobile_manufacturer = prompt_line(input, output, "Enter mobile manufacturer: ")?;

    let regular_name = prompt_line(input, output, "Enter regular customer name: ")?;
    let regular_address = prompt_line(input, output, "Enter regular customer address: ")?;

    let corporate_name = prompt_line(input, output, "Enter corporate customer name: ")?;
    let company_name = prompt_line(input, output, "Enter corporate customer company name: ")?;

    Ok(CheckoutInput {
        laptop: Laptop::new(laptop_name, laptop_price, laptop_brand),
        mobile: Mobile::new(mobile_name, mobile_price, mobile_manufacturer),
        regular: RegularCustomer::new(regular_name, regular_address),
        corporate: CorporateCustomer::new(corporate_name, company_name),
    })
}

/// Writes the prompt (no trailing newline), flushes, and reads one line.
///
/// The trailing line terminator is stripped; interior whitespace is kept
/// as typed. End of input before a line arrives is an `UnexpectedEof`
/// I/O error.
pub fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> ConsoleResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let bytes_read = input.read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "input ended before all values were read",
        )
        .into());
    }

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Prompts like [`prompt_line`], then parses the answer as money.
pub fn prompt_amount<R, W>(input: &mut R, output: &mut W, prompt: &str) -> ConsoleResult<Money>
where
    R: BufRead,
    W: Write,
{
    let line = prompt_line(input, output, prompt)?;
    Ok(line.parse()?)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::error::ConsoleError;

    #[test]
    fn test_prompt_line_writes_prompt_and_strips_newline() {
        let mut input = Cursor::new("ThinkBook\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Enter laptop name: ").unwrap();

        assert_eq!(line, "ThinkBook");
        assert_eq!(output, b"Enter laptop name: ");
    }

    #[test]
    fn test_prompt_line_handles_crlf() {
        let mut input = Cursor::new("ThinkBook\r\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Enter laptop name: ").unwrap();
        assert_eq!(line, "ThinkBook");
    }

    #[test]
    fn test_prompt_line_keeps_interior_spaces() {
        let mut input = Cursor::new("12 Elm Street\n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Enter regular customer address: ").unwrap();
        assert_eq!(line, "12 Elm Street");
    }

    #[test]
    fn test_prompt_line_eof_is_an_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let err = prompt_line(&mut input, &mut output, "Enter laptop name: ").unwrap_err();
        assert!(matches!(err, ConsoleError::Io(_)));
    }

    #[test]
    fn test_prompt_amount_parses_money() {
        let mut input = Cursor::new("999.99\n");
        let mut output = Vec::new();

        let amount = prompt_amount(&mut input, &mut output, "Enter laptop price: ").unwrap();
        assert_eq!(amount, Money::from_cents(99_999));
    }

    #[test]
    fn test_prompt_amount_rejects_garbage() {
        let mut input = Cursor::new("not-a-price\n");
        let mut output = Vec::new();

        let err = prompt_amount(&mut input, &mut output, "Enter laptop price: ").unwrap_err();
        assert!(matches!(err, ConsoleError::Input(_)));
    }

    #[test]
    fn test_read_checkout_full_session() {
        let mut input = Cursor::new(
            "Alpha\n1000\nBrandX\nBeta\n500\nMakerY\nAlice\n12 Elm Street\nBob\nGlobex\n",
        );
        let mut output = Vec::new();

        let checkout = read_checkout(&mut input, &mut output).unwrap();

        assert_eq!(checkout.laptop.name, "Alpha");
        assert_eq!(checkout.laptop.price, Money::from_cents(100_000));
        assert_eq!(checkout.laptop.brand, "BrandX");
        assert_eq!(checkout.mobile.name, "Beta");
        assert_eq!(checkout.mobile.price, Money::from_cents(50_000));
        assert_eq!(checkout.mobile.manufacturer, "MakerY");
        assert_eq!(checkout.regular.name, "Alice");
        assert_eq!(checkout.regular.address, "12 Elm Street");
        assert_eq!(checkout.corporate.name, "Bob");
        assert_eq!(checkout.corporate.company_name, "Globex");

        let prompts = String::from_utf8(output).unwrap();
        assert_eq!(
            prompts,
            "Enter laptop name: Enter laptop price: Enter laptop brand: \
             Enter mobile name: Enter mobile price: Enter mobile manufacturer: \
             Enter regular customer name: Enter regular customer address: \
             Enter corporate customer name: Enter corporate customer company name: "
        );
    }

    #[test]
    fn test_read_checkout_stops_at_first_bad_price() {
        let mut input = Cursor::new("Alpha\noops\n");
        let mut output = Vec::new();

        assert!(read_checkout(&mut input, &mut output).is_err());

        // The brand prompt was never reached
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.ends_with("Enter laptop price: "));
    }
}
