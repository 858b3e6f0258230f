// ─── Hytale Server Installer ───
// Sequential install pipeline for the Hytale dedicated server.
//
// Architecture:
//   paths      — runtime path context derived once from the install dir
//   config     — flat JSON configuration with per-field defaults
//   logging    — console + flat-file tracing setup
//   platform   — OS → downloader executable name
//   java       — `java -version` probe and major-version gate
//   download   — streaming HTTPS fetch of the vendor downloader
//   archive    — zip extraction, unix chmod helper
//   process    — argument splitting + downloader child process
//   fsops      — newest-zip lookup, recursive move, guarded cleanup
//   launch     — optional server launch (`java -jar HytaleServer.jar`)
//   installer  — the linear orchestration of all of the above

pub mod archive;
pub mod config;
pub mod download;
pub mod error;
pub mod fsops;
pub mod installer;
pub mod java;
pub mod launch;
pub mod logging;
pub mod paths;
pub mod platform;
pub mod process;
