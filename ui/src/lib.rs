//! Shared UI crate for SpecEduTracker. All state, models and views live here;
//! the platform crates only launch [`Shell`].

pub mod core;
pub mod i18n;
pub mod tracker;
pub mod views;

mod shell;
pub use shell::{Shell, ShellProps, ShellState, Tab};

pub mod components {
    // Fixed bottom navigation (components/tab_bar.rs)
    pub mod tab_bar;
    pub use tab_bar::TabBar;
}

#[cfg(test)]
mod tests;
