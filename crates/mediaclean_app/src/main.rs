#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}
