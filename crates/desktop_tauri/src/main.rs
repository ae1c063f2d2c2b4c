#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    mg_sender_desktop::run();
}
