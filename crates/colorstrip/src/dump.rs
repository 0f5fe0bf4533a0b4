//! JSON export of frames for external renderers.

use std::io::{self, Write};

use colorstrip_config::Settings;
use colorstrip_core::Polygon;
use colorstrip_palette::Palette;
use serde::Serialize;

use crate::scene::Scene;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dump<'a> {
    pub settings: &'a Settings,
    pub palette: &'a Palette,
    pub width: f64,
    pub height: f64,
    pub frames: Vec<DumpFrame>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpFrame {
    pub index: usize,
    /// Polygons index-aligned with the palette's color array.
    pub path_list: Vec<Polygon>,
}

/// Collect the initial frame plus `frames` updated ones.
pub fn collect(
    scene: &mut Scene,
    frames: usize,
    width: f64,
    height: f64,
    time_increment: f64,
) -> colorstrip_core::Result<Vec<DumpFrame>> {
    let mut out = Vec::with_capacity(frames + 1);
    out.push(DumpFrame {
        index: 0,
        path_list: scene.paths(width, height),
    });
    for index in 1..=frames {
        scene.update(time_increment)?;
        out.push(DumpFrame {
            index,
            path_list: scene.paths(width, height),
        });
    }
    Ok(out)
}

pub fn run(
    settings: Settings,
    frames: usize,
    width: f64,
    height: f64,
    time_increment: f64,
) -> color_eyre::Result<()> {
    let mut scene = Scene::new(settings)?;
    let frames = collect(&mut scene, frames, width, height, time_increment)?;
    let dump = Dump {
        settings: scene.settings(),
        palette: scene.palette(),
        width,
        height,
        frames,
    };
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &dump)?;
    writeln!(stdout)?;
    Ok(())
}
