use loadsys_model::constants::BULK_SAFETY_THRESHOLD;
use std::io::{BufRead, Write};
use std::time::Duration;

/// Whether `count` is large enough to warrant an explicit confirmation.
pub(crate) fn needs_confirmation(count: usize) -> bool {
    count > BULK_SAFETY_THRESHOLD
}

/// Only a case-insensitive `y` proceeds; any other answer declines.
pub(crate) fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Returns whether a bulk operation of `count` items should proceed. Counts at or
/// below the threshold proceed without a prompt. The reader and writer are injected
/// so the gate can be exercised without a terminal.
pub(crate) fn confirm_bulk<R, W>(
    count: usize,
    base_delay: Duration,
    input: &mut R,
    output: &mut W,
) -> std::io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    if !needs_confirmation(count) {
        return Ok(true);
    }
    writeln!(
        output,
        "WARNING: creating {} resources in one run can overload the API server,",
        count
    )?;
    writeln!(
        output,
        "trigger rate limiting, and leave failed deployments behind."
    )?;
    writeln!(
        output,
        "Creates will be spaced at least {} seconds apart.",
        base_delay.as_secs()
    )?;
    write!(output, "Proceed anyway? [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

#[cfg(test)]
mod test {
    use super::*;

    fn gate(count: usize, answer: &str) -> bool {
        let mut input = answer.as_bytes();
        let mut output = Vec::new();
        confirm_bulk(count, Duration::from_secs(10), &mut input, &mut output).unwrap()
    }

    #[test]
    fn small_counts_proceed_without_reading_input() {
        for count in 1..=10 {
            // No input is available; the gate must not try to read any.
            assert!(gate(count, ""));
        }
    }

    #[test]
    fn large_counts_follow_the_answer() {
        assert!(gate(11, "y\n"));
        assert!(gate(11, "Y\n"));
        assert!(gate(11, " y \n"));
        assert!(!gate(11, "n\n"));
        assert!(!gate(11, "yes\n"));
        assert!(!gate(11, "\n"));
        assert!(!gate(15, ""));
    }

    #[test]
    fn warning_mentions_the_count_and_delay() {
        let mut input = "n\n".as_bytes();
        let mut output = Vec::new();
        confirm_bulk(25, Duration::from_secs(10), &mut input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("25 resources"));
        assert!(text.contains("10 seconds"));
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("yes"));
    }
}
