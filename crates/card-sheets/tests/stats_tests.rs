use card_sheets::*;

fn manifest(xml: &str) -> Manifest {
    Manifest::parse(xml).unwrap()
}

#[test]
fn test_single_sided_statistics() {
    let manifest = manifest(
        r#"<order><fronts>
            <card><id>A</id><slots>1,2,3,4,5,6</slots></card>
            <card><id>B</id><slots>1,2,3,4,5</slots></card>
        </fronts></order>"#,
    );

    let stats = calculate_statistics(&manifest, &LayoutOptions::default());
    assert_eq!(
        stats,
        SheetStatistics {
            front_entries: 2,
            double_sided_entries: 0,
            cards: 11,
            cards_per_page: 9,
            pages: 2,
            back_pages: 0,
        }
    );
}

#[test]
fn test_back_pages_only_where_backs_land() {
    let manifest = manifest(
        r#"<order>
            <fronts>
                <card><id>A</id><slots>1,2,3,4,5,6,7,8,9</slots></card>
                <card><id>C</id><slots>x</slots></card>
            </fronts>
            <backs><card><id>B</id><slots>x</slots></card></backs>
        </order>"#,
    );

    let stats = calculate_statistics(&manifest, &LayoutOptions::default());
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.back_pages, 1);
    assert_eq!(stats.double_sided_entries, 1);
}

#[test]
fn test_double_sided_across_pages() {
    let manifest = manifest(
        r#"<order>
            <fronts><card><id>A</id><slots>1,2,3,4,5,6,7,8,9,10</slots></card></fronts>
            <backs><card><id>B</id><slots>1,2,3,4,5,6,7,8,9,10</slots></card></backs>
        </order>"#,
    );

    let stats = calculate_statistics(&manifest, &LayoutOptions::default());
    assert_eq!(stats.cards, 10);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.back_pages, 2);
}

#[test]
fn test_empty_manifest() {
    let stats = calculate_statistics(
        &manifest("<order><fronts/></order>"),
        &LayoutOptions::default(),
    );
    assert_eq!(stats.cards, 0);
    assert_eq!(stats.pages, 0);
    assert_eq!(stats.back_pages, 0);
}
