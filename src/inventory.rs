//! Fixed-width text listing of the marina inventory.

use crate::models::{Boat, Location};
use crate::registry::Registry;

/// The location column for one boat.
fn location_column(location: &Location) -> String {
    match location {
        Location::Slip(number) => format!("   slip   # {:>2}", number),
        Location::Land(bay) => format!("   land     {} ", bay),
        Location::Trailor(tag) => format!("trailor {}", tag),
        Location::Storage(number) => format!("storage  # {:>2}", number),
    }
}

/// Render a single inventory line, without a line terminator.
pub fn render_boat(boat: &Boat) -> String {
    format!(
        "{:<20} {:>4.0}' {}   Owes ${:>7.2}",
        boat.name,
        boat.length,
        location_column(&boat.location),
        boat.amount_owed
    )
}

/// Render the whole registry, sorted by name.
///
/// Example output:
/// ```text
/// Big Brother            20'    slip   # 27   Owes $   0.00
/// Jones                  21'    land     A    Owes $ 348.87
/// Tippy                  15' trailor CFJ677   Owes $  55.25
/// ```
pub fn render_inventory(registry: &Registry) -> String {
    let mut output = String::new();
    for boat in registry.ordered_view() {
        output.push_str(&render_boat(boat));
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_boat(name: &str, length: f64, location: Location, owed: f64) -> Boat {
        Boat {
            name: name.to_string(),
            length,
            location,
            amount_owed: owed,
        }
    }

    #[test]
    fn test_slip_line() {
        let boat = make_boat("Big Brother", 20.0, Location::Slip(27), 0.0);
        assert_eq!(
            render_boat(&boat),
            "Big Brother            20'    slip   # 27   Owes $   0.00"
        );
    }

    #[test]
    fn test_land_line() {
        let boat = make_boat("Jones", 21.0, Location::Land('A'), 348.87);
        assert_eq!(
            render_boat(&boat),
            "Jones                  21'    land     A    Owes $ 348.87"
        );
    }

    #[test]
    fn test_trailor_and_storage_lines() {
        let trailor = make_boat("Tippy", 15.0, Location::Trailor("CFJ677".to_string()), 55.25);
        assert_eq!(
            render_boat(&trailor),
            "Tippy                  15' trailor CFJ677   Owes $  55.25"
        );

        let storage = make_boat("Wet Dream", 32.0, Location::Storage(3), 1200.5);
        assert_eq!(
            render_boat(&storage),
            "Wet Dream              32' storage  #  3   Owes $1200.50"
        );
    }

    #[test]
    fn test_inventory_is_sorted() {
        let mut registry = Registry::new();
        registry
            .add(make_boat("Zelda", 10.0, Location::Slip(1), 0.0))
            .expect("room");
        registry
            .add(make_boat("amy", 12.0, Location::Land('B'), 0.0))
            .expect("room");

        let output = render_inventory(&registry);
        let names: Vec<&str> = output
            .lines()
            .map(|line| line.split_whitespace().next().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["amy", "Zelda"]);
    }

    #[test]
    fn test_empty_registry() {
        assert_eq!(render_inventory(&Registry::new()), "");
    }
}
