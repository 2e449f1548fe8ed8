//! 평균 해시 (average hash)
//!
//! 흑백 변환 → `hash_size x hash_size`로 축소 → 평균보다 밝은 픽셀을 1로 기록.

use crate::models::hashed_image::{HashedImage, ImageHash};
use crate::utils::error::Result;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use std::fs;
use std::path::Path;

/// 기본 해시 크기 (한 변의 픽셀 수)
pub const DEFAULT_HASH_SIZE: u32 = 48;

/// 이미지 해시 계산기
#[derive(Debug, Clone, Copy)]
pub struct ImageHasher {
    hash_size: u32,
}

impl Default for ImageHasher {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_SIZE)
    }
}

impl ImageHasher {
    pub fn new(hash_size: u32) -> Self {
        Self {
            hash_size: hash_size.max(1),
        }
    }

    pub fn hash_size(&self) -> u32 {
        self.hash_size
    }

    /// 디코딩된 이미지의 평균 해시
    pub fn average_hash(&self, image: &DynamicImage) -> ImageHash {
        let gray = image.to_luma8();
        let small = image::imageops::resize(
            &gray,
            self.hash_size,
            self.hash_size,
            FilterType::Lanczos3,
        );

        let pixels: Vec<u8> = small.pixels().map(|p| p.0[0]).collect();
        let sum: u64 = pixels.iter().map(|&p| u64::from(p)).sum();
        let mean = sum as f64 / pixels.len() as f64;

        ImageHash::from_bits(pixels.iter().map(|&p| f64::from(p) > mean))
    }

    /// 파일을 열어 해시 계산
    pub fn hash_file(&self, path: &Path) -> Result<HashedImage> {
        let image = image::open(path)?;
        let metadata = fs::metadata(path)?;
        let modified = metadata.modified()?;

        Ok(HashedImage::new(
            path.to_path_buf(),
            image.dimensions(),
            metadata.len(),
            modified,
            self.average_hash(&image),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, _| {
            let v = (x * 255 / width.max(1)) as u8;
            Rgb([v, v, v])
        }))
    }

    #[test]
    fn test_hash_length_matches_hash_size() {
        let hasher = ImageHasher::new(8);
        let hash = hasher.average_hash(&gradient(64, 64));
        assert_eq!(hash.bit_count(), 64);
    }

    #[test]
    fn test_scaled_copy_hashes_identically() {
        let hasher = ImageHasher::new(8);
        let a = hasher.average_hash(&gradient(64, 64));
        let b = hasher.average_hash(&gradient(128, 128));
        assert!(a.distance(&b) <= 2);
    }

    #[test]
    fn test_inverted_image_is_far() {
        let hasher = ImageHasher::new(8);
        let original = gradient(64, 64);
        let mut inverted = original.clone();
        inverted.invert();

        let distance = hasher
            .average_hash(&original)
            .distance(&hasher.average_hash(&inverted));
        assert!(distance > 32);
    }

    #[test]
    fn test_hash_file_reads_metadata() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("wide.png");
        gradient(40, 20).save(&path).unwrap();

        let hashed = ImageHasher::new(8).hash_file(&path).unwrap();
        assert_eq!((hashed.width, hashed.height), (40, 20));
        assert!(hashed.size > 0);
        assert_eq!(hashed.hash.bit_count(), 64);
    }

    #[test]
    fn test_hash_file_rejects_non_image() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "not an image").unwrap();

        assert!(ImageHasher::default().hash_file(&path).is_err());
    }

    #[test]
    fn test_zero_hash_size_is_clamped() {
        assert_eq!(ImageHasher::new(0).hash_size(), 1);
    }
}
