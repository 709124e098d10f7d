//! Integration tests for `LookupMap`.

use optfield::lookup::LookupMap;
use optfield::model::{Address, City, Person};
use optfield::optional::Optional;
use rstest::{fixture, rstest};

#[fixture]
fn directory() -> LookupMap<String, Person> {
    [
        (
            String::from("resident"),
            Person::with_address(Address::new(City::new("Young America"))),
        ),
        (
            String::from("drifter"),
            Person::with_address(Address::without_city()),
        ),
        (String::from("unknown"), Person::new()),
    ]
    .into_iter()
    .collect()
}

#[rstest]
#[case::resident("resident", Optional::present("Young America"))]
#[case::address_without_city("drifter", Optional::absent())]
#[case::person_without_address("unknown", Optional::absent())]
#[case::missing_key("nobody", Optional::absent())]
fn city_name_for_key(
    directory: LookupMap<String, Person>,
    #[case] key: &str,
    #[case] expected: Optional<&str>,
) {
    let city = directory
        .find(key)
        .flat_map(Person::address)
        .flat_map(Address::city)
        .map(City::name);

    assert_eq!(city, expected);
}

#[rstest]
fn find_never_panics_on_miss(directory: LookupMap<String, Person>) {
    for key in ["", "RESIDENT", "resident "] {
        assert!(directory.find(key).is_absent());
    }
    assert_eq!(directory.len(), 3);
}

#[rstest]
fn find_mut_allows_updating_nested_fields(mut directory: LookupMap<String, Person>) {
    directory
        .find_mut("drifter")
        .if_present(|person| person.set_address(Address::new(City::new("Chaska"))));

    let city = directory
        .find("drifter")
        .flat_map(Person::address)
        .flat_map(Address::city)
        .cloned();
    assert_eq!(city, Optional::present(City::new("Chaska")));
}

#[rstest]
fn iteration_visits_every_entry(directory: LookupMap<String, Person>) {
    let mut keys: Vec<&str> = directory.iter().map(|(key, _)| key.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["drifter", "resident", "unknown"]);
}

#[cfg(feature = "fxhash")]
#[rstest]
fn fx_lookup_map_behaves_like_default_map() {
    use optfield::lookup::FxLookupMap;

    let mut map: FxLookupMap<&str, i32> = FxLookupMap::default();
    map.insert("a", 1);
    assert_eq!(map.find("a"), Optional::present(&1));
    assert!(map.find("b").is_absent());
}
