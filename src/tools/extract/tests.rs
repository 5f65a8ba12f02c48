#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::tools::extract::*;

    const GRAB_PAGE: &str = r#"
        <html>
            <head><title>Cơm Tấm Sài Gòn - Quận 1 | GrabFood VN</title></head>
            <body>
                <h1 class="name___2epcT">Cơm Tấm Sài Gòn</h1>
                <div class="category___3C8lX">
                    <div class="menuItem___Dgysp">
                        <div class="menuItemPhoto___1BQ5b">
                            <div class="placeholder___1xhY0">
                                <img class="realImage___2TyNE show___3oA6B"
                                     src="https://food-cms.grab.com/compressed_webp/items/com-suon.webp">
                            </div>
                        </div>
                        <div class="menuItemInfo___PNeAQ">
                            <p class="itemNameTitle___1sFBq">Cơm Sườn Bì Chả</p>
                            <p class="itemDescription___2cIzt">Sườn nướng, bì, chả trứng</p>
                            <div class="itemPrice___1t4CE"><p>55.000₫</p></div>
                        </div>
                    </div>
                    <div class="menuItem___Dgysp">
                        <div class="menuItemPhoto___1BQ5b">
                            <div class="placeholder___1xhY0">
                                <img class="realImage___2TyNE" src="/static/images/plus-white.svg"
                                     data-src="/items/trung-op-la.jpg">
                            </div>
                        </div>
                        <div class="menuItemInfo___PNeAQ">
                            <p class="itemNameTitle___1sFBq">Trứng Ốp La</p>
                            <div class="itemPrice___1t4CE"><p>8.000₫</p></div>
                        </div>
                    </div>
                    <div class="menuItem___Dgysp">
                        <div class="menuItemInfo___PNeAQ">
                            <p class="itemNameTitle___1sFBq">Canh Chua</p>
                            <p class="soldOut___x1">Hết hàng</p>
                        </div>
                    </div>
                </div>
            </body>
        </html>
    "#;

    fn opts() -> ExtractOptions {
        ExtractOptions::default().with_origin("https://food.example.com")
    }

    #[test]
    fn test_scenario_single_container() {
        let html = r#"
            <html><body>
                <div class="menuItem">
                    <p>Bánh Mì Thịt Nướng</p>
                    <span>25.000 ₫</span>
                </div>
            </body></html>
        "#;
        let result = extract_menu_with(html, &opts()).unwrap();
        assert_eq!(
            result.items,
            vec![MenuItem {
                name: "Bánh Mì Thịt Nướng".into(),
                price: "25.000 ₫".into(),
                image_url: None,
            }]
        );
    }

    #[test]
    fn test_scenario_duplicate_containers() {
        let html = r#"
            <div class="menuItem"><p>Bánh Mì Thịt Nướng</p><span>25.000 ₫</span></div>
            <div class="popular">
                <div class="menuItem"><p>Bánh Mì Thịt Nướng</p><span>25.000 ₫</span></div>
            </div>
        "#;
        let result = extract_menu_with(html, &opts()).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Bánh Mì Thịt Nướng");
    }

    #[test]
    fn test_scenario_title_fallback() {
        let html = "<html><head><title>Ngon Restaurant | Grab Food</title></head><body></body></html>";
        let result = extract_menu_with(html, &opts()).unwrap();
        assert_eq!(result.restaurant_name, "Ngon Restaurant");
    }

    #[test]
    fn test_scenario_no_currency_is_empty_not_error() {
        let html = r#"<h1>Quán Đêm</h1><div class="menuItem"><span>Coming soon</span></div>"#;
        let result = extract_menu_with(html, &opts()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.restaurant_name, "Quán Đêm");
    }

    #[test]
    fn test_empty_document() {
        let result = extract_menu_with("", &opts()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.restaurant_name, UNKNOWN_RESTAURANT);
    }

    #[test]
    fn test_grab_like_page() {
        let result = extract_menu(GRAB_PAGE, "https://food.grab.com/vn/en/restaurant/com-tam").unwrap();
        assert_eq!(result.restaurant_name, "Cơm Tấm Sài Gòn");

        let names: Vec<&str> = result.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Cơm Sườn Bì Chả", "Trứng Ốp La"]);

        assert_eq!(result.items[0].price, "55.000₫");
        assert_eq!(
            result.items[0].image_url.as_deref(),
            Some("https://food-cms.grab.com/compressed_webp/items/com-suon.webp")
        );
        assert_eq!(
            result.items[1].image_url.as_deref(),
            Some("https://food.grab.com/items/trung-op-la.jpg")
        );
    }

    #[test]
    fn test_deterministic() {
        let first = extract_menu_with(GRAB_PAGE, &opts()).unwrap();
        for _ in 0..5 {
            assert_eq!(extract_menu_with(GRAB_PAGE, &opts()).unwrap(), first);
        }
    }

    #[test]
    fn test_fallback_runs_when_candidates_fail() {
        let html = r#"
            <div class="menuItem"><span>Chỉ có tên</span></div>
            <section><b>Nước cam ép</b><i>20.000 ₫</i></section>
        "#;
        let result = extract_menu_with(html, &opts()).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Nước cam ép");
        assert_eq!(result.items[0].price, "20.000 ₫");
    }

    #[test]
    fn test_fallback_not_used_when_locator_succeeds() {
        let html = r#"
            <div class="menuItem"><p>Bún bò Huế</p><span>50.000 ₫</span></div>
            <aside><b>Phí giao hàng</b><i>15.000 ₫</i></aside>
        "#;
        let result = extract_menu_with(html, &opts()).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Bún bò Huế");
    }

    #[test]
    fn test_inline_markup_inside_name() {
        let html = r#"<div class="menuItem">Phở <b>đặc biệt</b> tái<br>55.000 ₫</div>"#;
        let result = extract_menu_with(html, &opts()).unwrap();
        assert_eq!(
            result.items,
            vec![MenuItem {
                name: "Phở đặc biệt tái".into(),
                price: "55.000 ₫".into(),
                image_url: None,
            }]
        );
    }

    #[test]
    fn test_zero_width_name_candidate_is_passed_over() {
        let html = "<div class=\"menuItem\"><span>\u{200B}\u{200B}\u{200B}</span>\
                    <span>Trà sữa</span><span>25.000 ₫</span></div>";
        let result = extract_menu_with(html, &opts()).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Trà sữa");
    }

    #[test]
    fn test_custom_currency_markers() {
        let html = r#"<ul><li><b>Cheeseburger</b> <span>$7.50</span></li></ul>"#;
        let mut custom = opts();
        custom.currency_markers = vec!["$".into()];
        let result = extract_menu_with(html, &custom).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].price, "$7.50");

        assert!(extract_menu_with(html, &opts()).unwrap().is_empty());
    }

    #[test]
    fn test_custom_strategies() {
        let html = r#"<div class="menuItem"><p>Xôi gà</p><span>30.000 ₫</span></div>
                      <div class="combo"><p>Combo gia đình</p><span>199.000 ₫</span></div>"#;
        let doc = Document::parse(html).unwrap();
        let strategies: Vec<Box<dyn LocateStrategy>> =
            vec![Box::new(SelectorStrategy::new(".combo").unwrap())];
        let result = extract_document(&doc, &strategies, &opts());
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Combo gia đình");
    }

    #[test]
    fn test_binary_input_is_parse_error() {
        assert!(extract_menu_with("\u{0}\u{1}PNG", &opts()).is_err());
        assert!(matches!(
            extract_menu("\u{0}", "https://food.grab.com/x"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_page_url() {
        assert!(matches!(
            extract_menu("<h1>x</h1>", "not a url"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let html = r#"<div class="menuItem"><p>Bánh cuốn</p><span>35.000 ₫</span></div>"#;
        let result = extract_menu_with(html, &opts()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["restaurantName"], "Unknown Restaurant");
        assert_eq!(json["items"][0]["name"], "Bánh cuốn");
        assert_eq!(json["items"][0]["price"], "35.000 ₫");
        assert!(json["items"][0].get("imageUrl").is_none());
    }
}
