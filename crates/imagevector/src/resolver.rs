use crate::error::{Error, Result};
use crate::matcher;
use crate::types::{FindOptions, Image, ImageSource, ImageVector};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, trace};

impl ImageSource {
    /// Materialize this source into an image for the given target version
    ///
    /// An explicit tag is used verbatim. Without one, the tag is the target version
    /// with a single `v` prefix; without a target version the image has no tag.
    pub fn to_image(&self, target_version: Option<&str>) -> Image {
        let tag = self.tag.clone().or_else(|| {
            target_version.map(|version| format!("v{}", version.trim_start_matches('v')))
        });

        Image {
            name: self.name.clone(),
            repository: self.repository.clone(),
            tag,
        }
    }
}

impl ImageVector {
    /// Find the best image for `name` under the given options
    ///
    /// Candidates are scored by constraint specificity; on equal scores the first
    /// candidate in vector order wins.
    pub fn find_image(&self, name: &str, options: &FindOptions) -> Result<Image> {
        debug!("Finding image {} ({})", name, options);

        let mut best: Option<(&ImageSource, u8)> = None;
        for source in self.iter().filter(|source| source.name == name) {
            let Some(score) = matcher::score(source, name, options)? else {
                trace!("Skipping {} ({}): not eligible", source.name, source.repository);
                continue;
            };
            trace!("Candidate {} ({}) scored {}", source.name, source.repository, score);

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((source, score));
            }
        }

        let (source, score) = best.ok_or_else(|| Error::image_not_found(name, options))?;
        let image = source.to_image(options.target_version.as_deref());
        debug!("Resolved {} to {} (score {})", name, image, score);

        Ok(image)
    }

    /// Find images for all `names`, failing on the first one that cannot be resolved
    pub fn find_images<S: AsRef<str>>(
        &self,
        names: &[S],
        options: &FindOptions,
    ) -> Result<BTreeMap<String, Image>> {
        let mut images = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            let image = self
                .find_image(name, options)
                .map_err(|e| Error::batch_resolution(name, e))?;
            images.insert(name.to_string(), image);
        }
        Ok(images)
    }
}

/// Render resolved images as chart values (name to image reference)
pub fn image_map_to_values(images: &BTreeMap<String, Image>) -> Map<String, Value> {
    images
        .iter()
        .map(|(name, image)| (name.clone(), Value::String(image.to_string())))
        .collect()
}
