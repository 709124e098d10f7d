//! optfield-roster
//!
//! Walks through the optional-field contract end to end: reads email
//! addresses under both emptiness policies, resolves a city through a
//! person lookup chain, and filters a roster in two passes.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=optfield=trace cargo run --bin optfield-roster
//! ```

use chrono::Local;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use optfield::prelude::*;

const PERSON_NAME: &str = "A. Name";
const CITY_NAME: &str = "Young America";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "optfield=debug,optfield_roster=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    show_email_policies();
    show_lookup_chain();
    show_roster_filter();
}

fn show_email_policies() {
    let mut person = Person::new();
    tracing::info!(email = %person.email_address(), "email never set");

    person.set_email_address("");
    tracing::info!(email = %person.email_address(), allow_empty = person.allow_empty(), "empty email");

    person.set_allow_empty(true);
    tracing::info!(email = %person.email_address(), allow_empty = person.allow_empty(), "empty email");

    person.set_email_address("foo@bar.com");
    tracing::info!(email = %person.email_address(), "email set");
}

fn show_lookup_chain() {
    let mut people = LookupMap::new();
    people.insert(
        PERSON_NAME,
        Person::with_address(Address::new(City::new(CITY_NAME))),
    );

    for key in [PERSON_NAME, "Nobody"] {
        people
            .find(key)
            .flat_map(Person::address)
            .flat_map(Address::city)
            .if_present_or_else(
                |city| tracing::info!(key, %city, "resolved city"),
                || tracing::info!(key, "no city on record"),
            );
    }
}

fn show_roster_filter() {
    let mut male = Person::new();
    male.set_gender(Gender::Male);
    let mut born_today = Person::new();
    born_today.set_birthday(Local::now().date_naive());
    let mut roster = vec![male, born_today, Person::new()];

    Person::filter(&mut roster, |person| person.gender() == Gender::Male);
    tracing::info!(remaining = roster.len(), "removed males");

    Person::filter(&mut roster, |person| person.birthday().is_present());
    tracing::info!(remaining = roster.len(), "removed people with a birthday");
}
