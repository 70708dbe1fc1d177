//! Metadata write command
//!
//! Builds a field set from an optional TOML field file plus per-field
//! flags and writes it into every input PNG.

use clap::ArgMatches;
use log::{debug, info};

use crate::api;
use crate::commands::batch::{self, OutputTarget};
use crate::commands::command_traits::Command;
use crate::exif::builder::{EntryOrder, WriteOptions};
use crate::exif::errors::ExifResult;
use crate::exif::fields::FieldSet;
use crate::exif::gps::{Axis, GpsCoordinate};
use crate::utils::logger::Logger;

/// Per-field CLI flags: field key, long flag, help text
pub const FIELD_FLAGS: [(&str, &str, &str); 15] = [
    ("Make", "make", "Camera manufacturer"),
    ("Model", "model", "Camera model"),
    ("DateTime", "date-time", "Capture time, YYYY:MM:DD HH:MM:SS or ISO 8601"),
    ("ImageDescription", "description", "Image description"),
    ("Artist", "artist", "Photographer"),
    ("Copyright", "copyright", "Copyright notice"),
    ("Orientation", "orientation", "Orientation code (1-8)"),
    ("ExposureTime", "exposure-time", "Exposure time in seconds, e.g. 1/250"),
    ("FNumber", "f-number", "Aperture, e.g. f/2.8"),
    ("ISOSpeedRatings", "iso", "ISO sensitivity"),
    ("FocalLength", "focal-length", "Focal length, e.g. 35mm"),
    ("LensModel", "lens-model", "Lens model"),
    ("GPSLatitude", "latitude", "Latitude in signed decimal degrees"),
    ("GPSLongitude", "longitude", "Longitude in signed decimal degrees"),
    ("GPSAltitude", "altitude", "Altitude in signed meters"),
];

/// Default suffix for written files
pub const WRITE_SUFFIX: &str = ".exif.png";

/// Command for writing EXIF metadata into PNG files
pub struct WriteCommand<'a> {
    /// Input PNG files
    inputs: Vec<String>,
    /// Where each output goes
    output: OutputTarget,
    /// Merged field values
    fields: FieldSet,
    options: WriteOptions,
    /// Only show what would be written
    dry_run: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> WriteCommand<'a> {
    /// Create a new write command
    ///
    /// Fields from `--fields` are loaded first; individual field flags
    /// override them.
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let inputs = batch::input_files(args)?;
        let output = OutputTarget::from_args(args, inputs.len(), WRITE_SUFFIX)?;

        let mut fields = match args.get_one::<String>("fields") {
            Some(path) => {
                info!("Loading fields from {}", path);
                FieldSet::from_file(path)?
            }
            None => FieldSet::new(),
        };
        fields.merge(&Self::fields_from_flags(args));
        debug!("Fields: {:?}", fields);

        let entry_order = if args.get_flag("ascending-tags") {
            EntryOrder::Ascending
        } else {
            EntryOrder::Emission
        };

        Ok(WriteCommand {
            inputs,
            output,
            fields,
            options: WriteOptions { entry_order },
            dry_run: args.get_flag("dry-run"),
            logger,
        })
    }

    fn fields_from_flags(args: &ArgMatches) -> FieldSet {
        let mut fields = FieldSet::new();
        for (key, flag, _) in FIELD_FLAGS {
            if let Some(value) = args.get_one::<String>(flag) {
                fields.set(key, value.as_str());
            }
        }
        fields
    }

    /// Log the directories that would be written
    fn display_plan(&self) -> ExifResult<()> {
        let directories = api::build_directories(&self.fields, &self.options)?;
        let blob = directories.assemble()?;

        info!("EXIF blob: {} bytes, eXIf chunk: {} bytes", blob.len(), blob.len() + 12);
        for ifd in directories.iter() {
            info!("{}", ifd);
        }

        let sanitized = self.fields.sanitize();
        if let (Some(lat), Some(lng)) = (sanitized.gps_latitude, sanitized.gps_longitude) {
            let latitude = GpsCoordinate::from_decimal(Axis::Latitude, lat);
            let longitude = GpsCoordinate::from_decimal(Axis::Longitude, lng);
            if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
                info!("GPS position reads back as {:.6}, {:.6}", latitude.to_decimal(), longitude.to_decimal());
            }
        }

        for input in &self.inputs {
            info!("Would write {} -> {}", input, self.output.path_for(input));
        }
        Ok(())
    }
}

impl<'a> Command for WriteCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        if self.dry_run {
            return self.display_plan();
        }

        batch::run_batch(&self.inputs, "Writing metadata", |input| {
            let output = self.output.path_for(input);
            api::write_png_file(input, &output, &self.fields, &self.options, self.logger)
                .map(|_| ())
                .map_err(|e| {
                    let _ = self.logger.log_outcome("write", input, &format!("failed: {}", e));
                    e
                })
        })
    }
}
