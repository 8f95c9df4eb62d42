//! # Display Formatting Tests
//!
//! Title-casing of typed and OCR'd item names.

#[cfg(test)]
mod tests {
    use grocery_identity::display::is_measurement_token;
    use grocery_identity::{normalize_display_name, to_grocery_title_case};

    #[test]
    fn test_documented_title_cases() {
        assert_eq!(to_grocery_title_case("140g CHIN CHIN"), "140g Chin Chin");
        assert_eq!(to_grocery_title_case("bag of rice"), "Bag of Rice");
        assert_eq!(to_grocery_title_case("of mice and men"), "Of Mice and Men");
        assert_eq!(to_grocery_title_case("uht milk"), "UHT Milk");
    }

    #[test]
    fn test_receipt_lines() {
        let cases = [
            ("SEMI SKIMMED MILK 2L", "Semi Skimmed Milk 2L"),
            ("BBQ SAUCE 500ML", "BBQ Sauce 500ML"),
            ("CHEESE AND ONION CRISPS 6PK", "Cheese and Onion Crisps 6PK"),
            ("xl free range eggs", "XL Free Range Eggs"),
            ("the best of british", "The Best of British"),
            ("bananas 1.5kg", "Bananas 1.5kg"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_grocery_title_case(input), expected, "input: {}", input);
        }
    }

    #[test]
    fn test_measurement_casing_is_preserved() {
        assert_eq!(to_grocery_title_case("water 1.5L"), "Water 1.5L");
        assert_eq!(to_grocery_title_case("water 1.5l"), "Water 1.5l");
        assert!(is_measurement_token("2x500ml"));
        assert!(is_measurement_token("1,5kg"));
    }

    #[test]
    fn test_abbreviation_at_any_position() {
        assert_eq!(to_grocery_title_case("PG tips"), "PG Tips");
        assert_eq!(to_grocery_title_case("tips pg"), "Tips PG");
        assert_eq!(to_grocery_title_case("Uht"), "UHT");
    }

    #[test]
    fn test_idempotence() {
        let inputs = [
            "140g CHIN CHIN",
            "bag of rice",
            "OF MICE AND MEN",
            "uht milk",
            "  spaced    out   words ",
            "McVitie's DIGESTIVES 400g",
        ];
        for input in inputs {
            let once = to_grocery_title_case(input);
            assert_eq!(to_grocery_title_case(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn test_display_name_handles_absent_values() {
        assert_eq!(normalize_display_name(None), "");
        assert_eq!(normalize_display_name(Some("")), "");
        assert_eq!(normalize_display_name(Some("UHT MILK")), "UHT Milk");
    }
}
