use folder_icons::{EguiPresenter, IconMapping, IconResolver, Presenter, WindowConfig, platform};
use std::path::PathBuf;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format_target(false)
        .init();

    let args: Vec<_> = std::env::args_os().skip(1).collect();
    let [folder] = args.as_slice() else {
        println!("Usage: folder-icons <folder_path>");
        return;
    };
    let folder = PathBuf::from(folder);
    log::info!("Folder path: {}", folder.display());

    let entries = IconResolver::new(IconMapping::builtin()).resolve_or_empty(&folder);
    let presenter = EguiPresenter::new(WindowConfig::default(), platform::native());
    match presenter.present(entries) {
        Ok(state) => log::debug!("Presenter finished: {state:?}"),
        Err(e) => log::error!("{e}"),
    }
}
