//! Pattern 7: Default Methods and Name Collisions
//! Example: two traits with the same default method, resolved explicitly
//!
//! Run with: cargo run --example p7_trait_defaults

use colored::Colorize;

trait Clickable {
    // Required: every implementer decides what a click does
    fn click(&self) -> String;

    // Default: implementers get this for free and may replace it
    fn show_off(&self) -> String {
        "I'm clickable!".to_string()
    }
}

trait Focusable {
    fn set_focus(&self, focused: bool) -> String {
        format!("I {} focus.", if focused { "got" } else { "lost" })
    }

    fn show_off(&self) -> String {
        "I'm focusable!".to_string()
    }
}

struct Button;

impl Clickable for Button {
    fn click(&self) -> String {
        "I was clicked".to_string()
    }
}

impl Focusable for Button {}

impl Button {
    /// Inherent methods win over trait methods, so `button.show_off()` is no
    /// longer ambiguous. Both defaults are still reachable by naming the trait.
    fn show_off(&self) -> Vec<String> {
        vec![Clickable::show_off(self), <Button as Focusable>::show_off(self)]
    }
}

/// Replaces the provided `show_off` with its own.
struct RichButton;

impl Clickable for RichButton {
    fn click(&self) -> String {
        "rich click".to_string()
    }

    fn show_off(&self) -> String {
        "I'm a rich button!".to_string()
    }
}

/// Closest thing to an abstract class: one required method and one
/// provided method built on top of it.
trait Animated {
    fn animate(&self) -> String;

    fn animate_twice(&self) -> String {
        format!("{} {}", self.animate(), self.animate())
    }
}

impl Animated for RichButton {
    fn animate(&self) -> String {
        "*sparkle*".to_string()
    }
}

fn main() {
    println!("{}", "=== Default methods ===\n".bold());
    let button = Button;
    println!("{}", button.click());
    println!("{}", button.set_focus(true));
    println!("{}", button.set_focus(false));

    println!("{}", "\n=== Resolving the show_off collision ===".bold());
    for line in button.show_off() {
        println!("  {}", line);
    }
    assert_eq!(
        button.show_off(),
        vec!["I'm clickable!".to_string(), "I'm focusable!".to_string()]
    );
    println!("Clickable only: {}", Clickable::show_off(&button).cyan());
    println!("Focusable only: {}", Focusable::show_off(&button).cyan());

    println!("{}", "\n=== Overriding a default ===".bold());
    let rich = RichButton;
    println!("{}", rich.show_off());
    println!("{}", rich.animate_twice());
    assert_eq!(rich.animate_twice(), "*sparkle* *sparkle*");

    println!("\n=== Key Points ===");
    println!("1. Traits can carry default method bodies");
    println!("2. Same-named defaults from two traits must be named explicitly");
    println!("3. Required methods play the role of abstract members");
    println!("4. Inherent methods cannot be overridden at all");
}
