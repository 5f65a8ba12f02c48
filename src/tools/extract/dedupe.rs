use std::collections::HashSet;

use super::types::MenuItem;

/// Lowercased, trimmed name paired with the digits of the price.
///
/// Kept as a pair so that a trailing digit in the name can never merge with
/// the price digits.
pub fn dedup_key(item: &MenuItem) -> (String, String) {
    let name = item.name.trim().to_lowercase();
    let digits = item.price.chars().filter(char::is_ascii_digit).collect();
    (name, digits)
}

/// Drop repeats, keeping the first occurrence of each key in discovery order.
pub fn dedupe_items(items: Vec<MenuItem>) -> Vec<MenuItem> {
    let mut seen = HashSet::new();
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(dedup_key(&item)) {
            result.push(item);
        } else {
            tracing::debug!(name = %item.name, price = %item.price, "duplicate item removed");
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn it(name: &str, price: &str, image: Option<&str>) -> MenuItem {
        MenuItem {
            name: name.into(),
            price: price.into(),
            image_url: image.map(str::to_string),
        }
    }

    #[test]
    fn first_occurrence_wins() {
        let items = vec![
            it("Phở Bò", "45.000 ₫", None),
            it("Bún Chả", "40.000 ₫", None),
            it(" phở bò ", "45000₫", Some("https://cdn.x/a.jpg")),
        ];
        let out = dedupe_items(items);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], it("Phở Bò", "45.000 ₫", None));
        assert_eq!(out[1].name, "Bún Chả");
    }

    #[test]
    fn different_price_is_kept() {
        let out = dedupe_items(vec![
            it("Trà sữa", "30.000 ₫", None),
            it("Trà sữa", "35.000 ₫", None),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn name_digits_do_not_bleed_into_price() {
        let out = dedupe_items(vec![it("Combo1", "23.000 ₫", None), it("Combo", "123.000 ₫", None)]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn idempotent() {
        let once = dedupe_items(vec![
            it("A la carte", "10.000 ₫", None),
            it("a la carte", "10000 VND", None),
            it("Bánh flan", "12.000 ₫", None),
        ]);
        let twice = dedupe_items(once.clone());
        assert_eq!(once, twice);
    }
}
