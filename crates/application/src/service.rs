use std::path::Path;

use partial_pages_domain::{
    is_blank_band, standard_pages, CheckReport, PageImage, WidthScanReport, WidthTag,
    DOWNSAMPLE_FACTOR,
};
use tracing::{debug, error, info};

use crate::{
    ApplicationError, CheckOutcome, CheckPagesCommand, PageDecoder, PageFileStore,
    PagePathResolver, SettingsStore, TelemetryEvent, TelemetrySink,
};

pub const PARTIAL_PAGES_REMOVED_EVENT: &str = "partialPagesRemoved";

/// Finds and deletes page images whose download was cut short.
///
/// Callers must not run two checks at the same time; the persisted flag is
/// read once on entry and written once on success without any locking.
pub struct PartialPageChecker {
    settings: Box<dyn SettingsStore>,
    paths: Box<dyn PagePathResolver>,
    files: Box<dyn PageFileStore>,
    decoder: Box<dyn PageDecoder>,
    telemetry: Box<dyn TelemetrySink>,
}

impl PartialPageChecker {
    pub fn new(
        settings: Box<dyn SettingsStore>,
        paths: Box<dyn PagePathResolver>,
        files: Box<dyn PageFileStore>,
        decoder: Box<dyn PageDecoder>,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Self {
        Self {
            settings,
            paths,
            files,
            decoder,
            telemetry,
        }
    }

    /// Runs the check once per installation. Never fails outward: a fault
    /// leaves the flag unset so the next call tries again.
    pub fn check_pages(&self, command: CheckPagesCommand) -> CheckOutcome {
        match self.settings.did_check_partial_images() {
            Ok(true) => {
                debug!("partial page check already performed");
                return CheckOutcome::AlreadyChecked;
            }
            Ok(false) => {}
            Err(error) => {
                error!(%error, "failed to read partial page check flag");
                return CheckOutcome::Failed(error.to_string());
            }
        }

        match self.run_check(&command) {
            Ok(report) => CheckOutcome::Completed(report),
            Err(error) => {
                let message = format!(
                    "error while checking partial pages: {} and {}: {error}",
                    command.primary_width, command.secondary_width
                );
                error!(%error, "{message}");
                CheckOutcome::Failed(message)
            }
        }
    }

    fn run_check(&self, command: &CheckPagesCommand) -> Result<CheckReport, ApplicationError> {
        let mut report = CheckReport::default();
        report
            .widths
            .push(self.scan_width(&command.primary_width, command.total_pages)?);
        if command.secondary_width != command.primary_width {
            report
                .widths
                .push(self.scan_width(&command.secondary_width, command.total_pages)?);
        }

        self.settings.set_checked_partial_images()?;
        Ok(report)
    }

    /// Inspects every standard page of `width` and deletes the partial ones.
    ///
    /// Each page is decoded at 1/16 scale and its bottom band of
    /// `width.rows_to_check()` rows is read. A band with no painted pixel
    /// means the file was only partly written.
    pub fn scan_width(
        &self,
        width: &WidthTag,
        total_pages: u32,
    ) -> Result<WidthScanReport, ApplicationError> {
        let mut report = WidthScanReport::empty(width.clone());
        let Some(directory) = self.paths.images_directory(width) else {
            debug!(width = %width, "no images directory, nothing to check");
            return Ok(report);
        };

        let rows_to_check = width.rows_to_check();
        // pages of one width share dimensions, so this is sized once in practice
        let mut pixels: Vec<u32> = Vec::new();

        for page in standard_pages(total_pages) {
            let image = PageImage {
                page,
                width: width.clone(),
            };
            let path = directory.join(self.paths.page_file_name(page));
            if !self.files.exists(&path)? {
                continue;
            }

            let bitmap = self.decoder.decode_downsampled(&path, DOWNSAMPLE_FACTOR)?;
            let band_len = bitmap.width() as usize * rows_to_check as usize;
            if pixels.len() != band_len {
                pixels = vec![0; band_len];
            }

            bitmap.read_pixels(
                &mut pixels,
                0,
                bitmap.height().saturating_sub(rows_to_check),
                bitmap.width(),
                rows_to_check,
            )?;
            report.pages_inspected += 1;

            if is_blank_band(&pixels) {
                self.remove_partial(&image, &path)?;
                report.pages_removed += 1;
                report.removed_pages.push(page.get());
            }
        }

        if report.pages_removed > 0 {
            self.telemetry.record(
                TelemetryEvent::new(PARTIAL_PAGES_REMOVED_EVENT)
                    .with_attribute("pagesRemoved", report.pages_removed)
                    .with_attribute("width", width.as_str()),
            );
        }

        Ok(report)
    }

    fn remove_partial(&self, image: &PageImage, path: &Path) -> Result<(), ApplicationError> {
        self.files.remove(path)?;
        info!(path = %path.display(), "removed partial image for {image}");
        Ok(())
    }
}
