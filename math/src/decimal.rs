//! Scanning of decimal literals shared by the floating point parsers.

/// Split the longest decimal literal off the front of `input`.
///
/// Accepts an optional sign, digits with an optional fraction and an
/// optional exponent. Spellings such as `inf` or `nan` are not literals.
/// Returns the value together with the unconsumed tail.
pub(crate) fn split_decimal(input: &str) -> Option<(f64, &str)> {
    let bytes = input.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let (literal, rest) = input.split_at(end);
    literal.parse::<f64>().ok().map(|value| (value, rest))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
