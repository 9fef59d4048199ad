//! The `repack` command.

use std::path::PathBuf;

use crate::cli::args::RepackArgs;
use crate::dds::INDEX_FILE;
use crate::error::Result;
use crate::textures::{
    DefaultConverter, RepackJob, Repacker, Texconv, TextureConverter, DEFAULT_OUTPUT_FILE,
};
use crate::ui::{Prompt, UserInterface};

use super::{ask_confirm, ask_path, Command};

/// Writes edited textures back into one container or a folder of them.
pub struct RepackCommand {
    args: RepackArgs,
    converter: Box<dyn TextureConverter>,
}

impl RepackCommand {
    /// Create the command, running texconv from `--texconv`.
    pub fn new(args: RepackArgs) -> Self {
        let converter = DefaultConverter::new(Texconv::new(&args.texconv));
        Self::with_converter(args, Box::new(converter))
    }

    /// Create the command with a specific converter.
    pub fn with_converter(args: RepackArgs, converter: Box<dyn TextureConverter>) -> Self {
        Self { args, converter }
    }

    fn index_file(&self, ui: &mut dyn UserInterface, asking: bool) -> Result<String> {
        if let Some(index) = &self.args.index {
            return Ok(index.clone());
        }
        if !asking {
            return Ok(INDEX_FILE.to_string());
        }
        let answer = ui
            .prompt(&Prompt::input("index_file", "Enter log filename", Some(INDEX_FILE)))?
            .as_string();
        Ok(if answer.is_empty() {
            INDEX_FILE.to_string()
        } else {
            answer
        })
    }
}

impl Command for RepackCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("Guitar Hero III PC Texture Repacker");
        let repacker = Repacker::new(self.converter.as_ref());

        let asking = self.args.original.is_none();
        let batch = self.args.batch || (asking && ask_confirm(ui, "batch", "Run in batch mode?")?);

        if batch {
            let dir = match &self.args.original {
                Some(dir) => dir.clone(),
                None => ask_path(
                    ui,
                    "input_dir",
                    "Enter path to folder containing *_extracted folders",
                    None,
                )?,
            };
            let index = self.index_file(ui, asking)?;
            repacker.batch_repack(&dir, &index, ui)?;
            return Ok(());
        }

        let original = match &self.args.original {
            Some(original) => original.clone(),
            None => ask_path(ui, "original_file", "Enter path to original file", None)?,
        };
        let dds_dir = match &self.args.dds_dir {
            Some(dir) => dir.clone(),
            None => ask_path(
                ui,
                "dds_dir",
                "Enter path to folder containing extracted DDS files",
                None,
            )?,
        };
        let index_file = self.index_file(ui, asking)?;
        let output = match &self.args.output {
            Some(output) => output.clone(),
            None if asking => ask_path(
                ui,
                "output_file",
                "Enter output filename",
                Some(DEFAULT_OUTPUT_FILE),
            )?,
            None => PathBuf::from(DEFAULT_OUTPUT_FILE),
        };

        let job = RepackJob {
            original,
            dds_dir,
            index_file,
            output,
        };
        repacker.repack(&job, ui)?;
        Ok(())
    }
}
