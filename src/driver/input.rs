use crate::error::InputError;

/// Parse one line of console input as a column number and check it against
/// the columns that are currently open.
pub fn parse_move(input: &str, available: &[usize]) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let column: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;

    if available.contains(&column) {
        Ok(column)
    } else {
        Err(InputError::Unavailable {
            column,
            available: available.to_vec(),
        })
    }
}
