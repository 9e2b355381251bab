//! Shows the files of one folder as a grid of clickable icons.
//!
//! [`resolver::IconResolver`] picks an icon asset for every file and decodes
//! it; [`presenter::EguiPresenter`] lays the results out in a window and
//! opens a file through [`platform::PlatformServices`] when its icon is
//! clicked.

pub mod error;
pub mod image_load;
pub mod layout;
pub mod mapping;
pub mod platform;
pub mod presenter;
pub mod resolver;

mod app;
mod central;
mod input;
mod style;
mod ui;

pub use app::{LauncherApp, Tile};
pub use error::{PresentError, ResolveError};
pub use mapping::IconMapping;
pub use presenter::{EguiPresenter, Presenter, WindowConfig, WindowState};
pub use resolver::{FolderEntry, IconResolver};
