use std::io::Cursor;

use marina::models::*;
use marina::registry::Registry;
use marina::shell::Shell;
use speculate2::speculate;

fn sample_registry() -> Registry {
    let mut registry = Registry::new();
    registry.add_line("Jones,21,land,A,348.87").expect("valid line");
    registry.add_line("Big Brother,20,slip,27,0.00").expect("valid line");
    registry
}

/// Feed `input` to a shell and return the registry it hands back plus everything it printed.
fn run(registry: Registry, input: &str) -> (Registry, String) {
    let mut output = Vec::new();
    let registry = Shell::new(registry, Cursor::new(input.to_string()), &mut output)
        .run()
        .expect("in-memory shell session");
    (registry, String::from_utf8(output).expect("utf8 output"))
}

speculate! {
    describe "menu" {
        it "greets and says goodbye" {
            let (_, output) = run(Registry::new(), "x\n");

            assert!(output.starts_with(
                "Welcome to the Boat Management System\n-------------------------------------\n"
            ));
            assert!(output.contains("(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it : "));
            assert!(output.ends_with("Exiting the Boat Management System\n"));
        }

        it "accepts upper case options" {
            let (_, output) = run(sample_registry(), "I\nX\n");
            assert!(output.contains("Big Brother            20'    slip   # 27   Owes $   0.00"));
        }

        it "reports unknown options" {
            let (_, output) = run(Registry::new(), "q\nx\n");
            assert!(output.contains("Invalid option q\n"));
        }

        it "exits at end of input" {
            let (registry, output) = run(sample_registry(), "m\n");

            assert!(output.ends_with("Exiting the Boat Management System\n"));
            assert_eq!(registry.get("Big Brother").map(|b| b.amount_owed), Some(250.0));
        }
    }

    describe "inventory" {
        it "lists boats by name" {
            let (_, output) = run(sample_registry(), "i\nx\n");

            let big = output.find("Big Brother").expect("listed");
            let jones = output.find("Jones").expect("listed");
            assert!(big < jones);
            assert!(output.contains("Jones                  21'    land     A    Owes $ 348.87\n"));
        }
    }

    describe "add" {
        it "adds a boat from a data line" {
            let (registry, _) = run(Registry::new(), "a\nTippy,15,trailor,CFJ677,55.25\nx\n");

            let tippy = registry.get("tippy").expect("added");
            assert_eq!(tippy.location, Location::Trailor("CFJ677".to_string()));
        }

        it "explains a rejected line" {
            let (registry, output) = run(Registry::new(), "a\nnot a boat\nx\n");

            assert!(registry.is_empty());
            assert!(output.contains("Invalid boat data: line has no delimiter"));
        }
    }

    describe "remove" {
        it "removes a boat by name" {
            let (registry, output) = run(sample_registry(), "r\nJONES\nx\n");

            assert!(registry.get("Jones").is_none());
            assert_eq!(registry.len(), 1);
            assert!(!output.contains("No boat with that name"));
        }

        it "reports an unknown name" {
            let (registry, output) = run(sample_registry(), "r\nSmith\nx\n");

            assert_eq!(registry.len(), 2);
            assert!(output.contains("No boat with that name\n"));
        }
    }

    describe "payment" {
        it "reduces the balance" {
            let (registry, _) = run(sample_registry(), "p\njones\n48.87\nx\n");
            assert_eq!(registry.get("Jones").map(|b| b.amount_owed), Some(300.0));
        }

        it "refuses more than is owed" {
            let (registry, output) = run(sample_registry(), "p\nJones\n500\nx\n");

            assert!(output.contains("That is more than the amount owed, $348.87\n"));
            assert_eq!(registry.get("Jones").map(|b| b.amount_owed), Some(348.87));
        }

        it "asks for a name it knows before the amount" {
            let (_, output) = run(sample_registry(), "p\nSmith\nx\n");

            assert!(output.contains("No boat with that name\n"));
            assert!(!output.contains("Please enter the amount to be paid"));
        }

        it "rejects an amount that is not a number" {
            let (registry, output) = run(sample_registry(), "p\nJones\nlots\nx\n");

            assert!(output.contains("Invalid amount\n"));
            assert_eq!(registry.get("Jones").map(|b| b.amount_owed), Some(348.87));
        }
    }

    describe "month" {
        it "charges fees to every boat" {
            let (registry, _) = run(sample_registry(), "m\nx\n");

            assert_eq!(registry.get("Jones").map(|b| b.amount_owed), Some(348.87 + 294.0));
            assert_eq!(registry.get("Big Brother").map(|b| b.amount_owed), Some(250.0));
        }
    }
}
