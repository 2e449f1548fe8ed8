//! 해시가 계산된 이미지
//!
//! 해시는 비트 벡터로 보관하고, 두 이미지의 차이는 해밍 거리로 잽니다.

use std::path::PathBuf;
use std::time::SystemTime;

/// 지각 해시 (비트 벡터)
///
/// `hash_size * hash_size` 비트를 u64 워드 단위로 저장합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHash {
    words: Vec<u64>,
    bits: usize,
}

impl ImageHash {
    /// 비트 시퀀스로부터 해시 생성
    pub fn from_bits<I>(bits: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let mut words = Vec::new();
        let mut count = 0usize;
        for bit in bits {
            if count % 64 == 0 {
                words.push(0u64);
            }
            if bit {
                let last = words.len() - 1;
                words[last] |= 1u64 << (count % 64);
            }
            count += 1;
        }
        Self { words, bits: count }
    }

    /// 비트 개수
    #[cfg(test)]
    pub fn bit_count(&self) -> usize {
        self.bits
    }

    /// 해밍 거리
    ///
    /// 길이가 다른 해시끼리는 남는 비트를 모두 다른 것으로 센다.
    pub fn distance(&self, other: &ImageHash) -> u32 {
        let common: u32 = self
            .words
            .iter()
            .zip(other.words.iter())
            .map(|(a, b)| (a ^ b).count_ones())
            .sum();
        let extra = self.bits.abs_diff(other.bits) as u32;
        common + extra
    }
}

/// 해시가 계산된 이미지
#[derive(Debug, Clone)]
pub struct HashedImage {
    /// 파일 경로
    pub path: PathBuf,
    /// 가로 픽셀
    pub width: u32,
    /// 세로 픽셀
    pub height: u32,
    /// 파일 크기 (바이트)
    pub size: u64,
    /// 수정 시간
    pub modified: SystemTime,
    /// 평균 해시
    pub hash: ImageHash,
}

impl HashedImage {
    pub fn new(
        path: PathBuf,
        (width, height): (u32, u32),
        size: u64,
        modified: SystemTime,
        hash: ImageHash,
    ) -> Self {
        Self {
            path,
            width,
            height,
            size,
            modified,
            hash,
        }
    }

    /// 삭제 목록에 들어가는 경로 문자열
    ///
    /// 스캐너는 UTF-8 경로만 받아들이므로 손실 변환이 일어나지 않습니다.
    pub fn path_string(&self) -> String {
        self.path.to_string_lossy().into_owned()
    }

    /// 세로가 더 긴 이미지인지
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub fn distance(&self, other: &HashedImage) -> u32 {
        self.hash.distance(&other.hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_from_bits_packs_words() {
        let hash = ImageHash::from_bits((0..130).map(|i| i % 2 == 0));
        assert_eq!(hash.bit_count(), 130);
        assert_eq!(hash.words.len(), 3);
    }

    #[test]
    fn test_distance_identical_is_zero() {
        let a = ImageHash::from_bits((0..64).map(|i| i % 3 == 0));
        assert_eq!(a.distance(&a.clone()), 0);
    }

    #[test]
    fn test_distance_counts_differing_bits() {
        let a = ImageHash::from_bits(vec![true, true, false, false]);
        let b = ImageHash::from_bits(vec![true, false, true, false]);
        assert_eq!(a.distance(&b), 2);
        assert_eq!(b.distance(&a), 2);
    }

    #[test]
    fn test_distance_length_mismatch() {
        let a = ImageHash::from_bits(vec![false; 4]);
        let b = ImageHash::from_bits(vec![false; 6]);
        assert_eq!(a.distance(&b), 2);
    }

    #[test]
    fn test_portrait_detection() {
        let hash = ImageHash::from_bits(vec![false]);
        let image = HashedImage::new(
            PathBuf::from("/tmp/a.png"),
            (100, 200),
            10,
            SystemTime::now(),
            hash,
        );
        assert!(image.is_portrait());
        assert_eq!(image.path_string(), "/tmp/a.png");
    }
}
