use dioxus::prelude::*;

use crate::carousel::ImageCarousel;
use crate::components::pico::Card;
use crate::components::pico::Grid;

const INSURANCE_PRODUCTS: [&str; 8] = [
    "Life Insurance",
    "Health Insurance",
    "Vehicle Insurance",
    "Property Insurance",
    "Travel Insurance",
    "Business Insurance",
    "Education Insurance",
    "Pet Insurance",
];

const EMI_CALCULATORS: [&str; 5] = [
    "Personal Loan",
    "Home Loan",
    "Car Loan",
    "Business Loan",
    "Education Loan",
];

/// A square placeholder tile used throughout the feed until real creative
/// assets exist.
#[component]
fn Tile(label: String, #[props(default = 160)] size: u32, #[props(default = false)] round: bool) -> Element {
    let radius = if round { "50%" } else { "var(--pico-border-radius)" };
    rsx! {
        div {
            style: "flex: 0 0 auto; width: {size}px; height: {size}px; display: flex; \
                    align-items: center; justify-content: center; text-align: center; \
                    padding: 0.5rem; background: var(--pico-card-background-color); \
                    box-shadow: var(--pico-card-box-shadow); border-radius: {radius};",
            small { "{label}" }
        }
    }
}

/// A horizontally scrolling strip of tiles.
#[component]
fn TileStrip(labels: Vec<String>, #[props(default = 160)] size: u32, #[props(default = false)] round: bool) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 1rem; overflow-x: auto; padding-bottom: 0.5rem;",
            for (i, label) in labels.into_iter().enumerate() {
                Tile { key: "{i}", label, size, round }
            }
        }
    }
}

/// The home feed: carousel, welcome card, and the product showcases. All
/// content is hard-coded mock data.
#[component]
pub fn HomeScreen() -> Element {
    rsx! {
        ImageCarousel {}

        Card {
            div {
                style: "text-align: center; padding: 1rem;",
                div { style: "font-size: 3rem;", "🏦" }
                h4 { "Welcome to KFinOne" }
                p { "Your Financial Partner" }
            }
        }

        section {
            h5 { "Our Loans" }
            TileStrip {
                labels: (1..=5).map(|i| format!("Partner {i}")).collect::<Vec<_>>(),
            }
        }

        Card {
            h5 { "Our Loan Products" }
            p {
                "Discover our comprehensive range of loan products designed to meet your \
                 financial needs. From personal loans to business financing, we offer \
                 competitive rates and flexible terms to help you achieve your goals."
            }
            TileStrip {
                labels: (1..=12).map(|i| format!("Product {i}")).collect::<Vec<_>>(),
            }
        }

        Card {
            h5 { "Our Insurance Products" }
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; \
                        text-align: center;",
                for product in INSURANCE_PRODUCTS {
                    div {
                        div { style: "font-size: 1.5rem;", "🛡" }
                        small { "{product}" }
                    }
                }
            }
        }

        Grid {
            Tile { label: "Zero processing fee", size: 170 }
            Tile { label: "Approval in minutes", size: 170 }
            Tile { label: "Flexible tenures", size: 170 }
            Tile { label: "Trusted partners", size: 170 }
        }

        section {
            h5 { "Featured Products" }
            TileStrip {
                labels: (1..=5).map(|i| format!("Featured {i}")).collect::<Vec<_>>(),
                size: 120,
                round: true,
            }
        }

        section {
            h5 { "EMI Calculator" }
            TileStrip {
                labels: EMI_CALCULATORS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                size: 90,
                round: true,
            }
        }
    }
}
