use anyhow::Result;
use invasion_common::App;
use invasion_core::{InvasionApp, Settings};
use invasion_sdl2::{SdlContext, SdlInitInfo};

/// Assemble the game from its compiled-in settings and run it until the
/// player quits.
pub fn run() -> Result<()> {
    let settings = Settings::default();
    log::info!("Starting {}", settings.name);
    let app = InvasionApp::new(settings)?;

    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .fps(app.fps())
        .title(app.title())
        .images(app.images())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
