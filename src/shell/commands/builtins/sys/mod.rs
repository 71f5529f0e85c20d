pub mod reboot;
