//! The `unpack` command.

use std::path::PathBuf;

use crate::cli::args::UnpackArgs;
use crate::error::Result;
use crate::textures::{DefaultConverter, Texconv, TextureConverter, Unpacker, DEFAULT_OUTPUT_DIR, DEFAULT_TEXCONV};
use crate::ui::UserInterface;

use super::{ask_confirm, ask_path, Command};

/// Extracts textures from one container file or a folder of them.
pub struct UnpackCommand {
    args: UnpackArgs,
    converter: Box<dyn TextureConverter>,
}

impl UnpackCommand {
    /// Create the command with the default converter.
    pub fn new(args: UnpackArgs) -> Self {
        Self::with_converter(args, Box::new(DefaultConverter::new(Texconv::new(DEFAULT_TEXCONV))))
    }

    /// Create the command with a specific converter.
    pub fn with_converter(args: UnpackArgs, converter: Box<dyn TextureConverter>) -> Self {
        Self { args, converter }
    }
}

impl Command for UnpackCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("Guitar Hero III PC Texture Unpacker");
        let unpacker = Unpacker::new(self.converter.as_ref());

        // Prompts only fill in a run started without paths.
        let asking = self.args.input.is_none();
        let batch = self.args.batch || (asking && ask_confirm(ui, "batch", "Run in batch mode?")?);

        if batch {
            let dir = match &self.args.input {
                Some(dir) => dir.clone(),
                None => ask_path(ui, "input_dir", "Enter path to folder containing files", None)?,
            };
            unpacker.batch_unpack(&dir, ui)?;
            return Ok(());
        }

        let input = match &self.args.input {
            Some(input) => input.clone(),
            None => ask_path(
                ui,
                "input_file",
                "Enter full path to input file *.pak/*.pab/*.img.xen",
                None,
            )?,
        };
        let output = match &self.args.output {
            Some(output) => output.clone(),
            None if asking => ask_path(
                ui,
                "output_dir",
                "Enter output directory",
                Some(DEFAULT_OUTPUT_DIR),
            )?,
            None => PathBuf::from(DEFAULT_OUTPUT_DIR),
        };
        unpacker.unpack(&input, &output, ui)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dds::INDEX_FILE;
    use crate::error::TexkitError;
    use crate::textures::tests::FakeConverter;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn command(args: UnpackArgs) -> UnpackCommand {
        UnpackCommand::with_converter(args, Box::new(FakeConverter::default()))
    }

    fn container(temp: &TempDir) -> PathBuf {
        let path = temp.path().join("global.pab.xen");
        let mut data = b"HDR".to_vec();
        data.extend(crate::dds::header::tests::header(b"DXT1", 1));
        fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn paths_from_arguments_skip_prompts() {
        let temp = TempDir::new().unwrap();
        let input = container(&temp);
        let out = temp.path().join("out");
        let mut ui = MockUI::new();

        command(UnpackArgs {
            input: Some(input),
            output: Some(out.clone()),
            batch: false,
        })
        .execute(&mut ui)
        .unwrap();

        assert!(ui.prompts_shown().is_empty());
        assert!(out.join(INDEX_FILE).exists());
        assert!(out.join("dds_001.png").exists());
    }

    #[test]
    fn missing_paths_are_prompted_for() {
        let temp = TempDir::new().unwrap();
        let input = container(&temp);
        let out = temp.path().join("prompted");
        let mut ui = MockUI::new();
        ui.set_prompt_response("batch", "n");
        ui.set_prompt_response("input_file", &input.display().to_string());
        ui.set_prompt_response("output_dir", &out.display().to_string());

        command(UnpackArgs::default()).execute(&mut ui).unwrap();

        assert_eq!(ui.prompts_shown(), vec!["batch", "input_file", "output_dir"]);
        assert!(out.join(INDEX_FILE).exists());
    }

    #[test]
    fn batch_prompt_asks_for_folder() {
        let temp = TempDir::new().unwrap();
        container(&temp);
        let mut ui = MockUI::new();
        ui.set_prompt_response("batch", "y");
        ui.set_prompt_response("input_dir", &temp.path().display().to_string());

        command(UnpackArgs::default()).execute(&mut ui).unwrap();

        assert_eq!(ui.prompts_shown(), vec!["batch", "input_dir"]);
        assert!(temp.path().join("global.pab_extracted").join(INDEX_FILE).exists());
    }

    #[test]
    fn unanswered_input_prompt_is_an_error() {
        let mut ui = MockUI::new();
        let err = command(UnpackArgs::default()).execute(&mut ui).unwrap_err();
        assert!(matches!(err, TexkitError::MissingInput { ref key } if key == "input_file"));
    }
}
