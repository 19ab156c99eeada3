//! Small display formatting helpers.

/// Two-digit display index for a zero-based position ("01", "12").
pub fn padded_index(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// "1 product", "6 services".
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Upper-cased kicker text for section headings ("OUR WORK").
pub fn kicker(text: &str) -> String {
    text.to_uppercase()
}

/// Star string for a 0-5 rating ("★★★★☆").
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_index() {
        assert_eq!(padded_index(0), "01");
        assert_eq!(padded_index(9), "10");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1, "product", "products"), "1 product");
        assert_eq!(count_label(0, "product", "products"), "0 products");
    }

    #[test]
    fn test_stars_clamps() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
        assert_eq!(kicker("our work"), "OUR WORK");
    }
}
