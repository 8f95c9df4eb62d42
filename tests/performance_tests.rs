//! # Concurrency and Throughput Tests
//!
//! The engine shares only read-only tables between calls, so it must give
//! identical answers when called from many threads at once and stay fast on
//! realistic list sizes.

#[cfg(test)]
mod tests {
    use grocery_identity::{find_fuzzy_matches, normalize_item_name, variant_key, MatchOptions};
    use std::sync::Arc;
    use std::thread;
    use std::time::{Duration, Instant};

    fn catalog(size: usize) -> Vec<String> {
        let bases = [
            "Whole Milk",
            "Brown Bread",
            "Cheddar Cheese",
            "Bananas",
            "Free Range Eggs",
            "Roasted Cashews",
            "Basmati Rice",
            "Tomato Ketchup",
        ];
        (0..size)
            .map(|i| format!("{} {}", bases[i % bases.len()], i / bases.len()))
            .collect()
    }

    #[test]
    fn test_concurrent_matching_is_deterministic() {
        let candidates = Arc::new(catalog(200));
        let expected = find_fuzzy_matches(
            "cheddar chese",
            candidates.as_slice(),
            &MatchOptions::default(),
        );

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let candidates = Arc::clone(&candidates);
                thread::spawn(move || {
                    (0..20)
                        .map(|_| {
                            find_fuzzy_matches(
                                "cheddar chese",
                                candidates.as_slice(),
                                &MatchOptions::default(),
                            )
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for result in handle.join().unwrap() {
                assert_eq!(result, expected);
            }
        }
    }

    #[test]
    fn test_concurrent_keys_agree() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                thread::spawn(move || {
                    let name = if i % 2 == 0 { "Roasted Cashews" } else { "roasted cashew" };
                    variant_key(name, "180 g")
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "roasted cashew|180g");
        }
    }

    #[test]
    fn test_matching_large_list_is_bounded() {
        let candidates = catalog(2_000);

        let start = Instant::now();
        let matches = find_fuzzy_matches("basmati rise", &candidates, &MatchOptions::default());
        let elapsed = start.elapsed();

        assert!(!matches.is_empty());
        assert!(matches.len() <= 10);
        assert!(
            elapsed < Duration::from_secs(5),
            "matching took {:?}",
            elapsed
        );
    }

    #[test]
    fn test_normalization_throughput() {
        let names = catalog(1_000);
        let start = Instant::now();
        for name in &names {
            let _ = normalize_item_name(name);
        }
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
