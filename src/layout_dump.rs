use crate::layout::CloudLayout;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct CloudDump {
    pub width: f32,
    pub height: f32,
    pub words: Vec<WordDump>,
}

#[derive(Debug, Serialize)]
pub struct WordDump {
    pub text: String,
    pub weight: u8,
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub rotate: f32,
    pub fallback: bool,
}

impl CloudDump {
    pub fn from_layout(layout: &CloudLayout) -> Self {
        let words = layout
            .words
            .iter()
            .map(|word| WordDump {
                text: word.text.clone(),
                weight: word.weight.into(),
                left: word.left,
                top: word.top,
                width: word.width,
                height: word.height,
                rotate: word.rotate,
                fallback: word.fallback,
            })
            .collect();
        CloudDump {
            width: layout.width,
            height: layout.height,
            words,
        }
    }
}

pub fn write_layout_dump(path: &Path, layout: &CloudLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = CloudDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
