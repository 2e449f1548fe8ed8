//! 유사 이미지 그룹
//!
//! 기준 이미지 하나와 그 이미지에 가까운 이미지들. 멤버 경로를 정렬한 목록이 그룹의 식별자입니다.

use crate::models::hashed_image::HashedImage;
use std::fmt;
use std::path::PathBuf;

/// 그룹 내 이미지 점수
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    /// 기준 이미지
    Original,
    /// 기준 이미지와의 해시 거리
    Difference(u32),
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Original => write!(f, "Original"),
            Score::Difference(distance) => write!(f, "{}", distance),
        }
    }
}

/// 그룹 멤버 (이미지 + 점수)
#[derive(Debug, Clone, Copy)]
pub struct GroupMember<'a> {
    pub image: &'a HashedImage,
    pub score: Score,
}

/// 유사 이미지 그룹
///
/// 기준 이미지와, 기준 이미지로부터 임계값 이내에 있는 이미지들.
#[derive(Debug, Clone)]
pub struct SimilarityGroup {
    pub original: HashedImage,
    pub similar: Vec<(HashedImage, u32)>,
}

impl SimilarityGroup {
    pub fn new(original: HashedImage, similar: Vec<(HashedImage, u32)>) -> Self {
        Self { original, similar }
    }

    /// 멤버 수 (기준 이미지 포함)
    pub fn member_count(&self) -> usize {
        1 + self.similar.len()
    }

    /// 기준 이미지 먼저, 이어서 유사 이미지 순서
    pub fn members(&self) -> impl Iterator<Item = GroupMember<'_>> {
        std::iter::once(GroupMember {
            image: &self.original,
            score: Score::Original,
        })
        .chain(self.similar.iter().map(|(image, distance)| GroupMember {
            image,
            score: Score::Difference(*distance),
        }))
    }

    pub fn member(&self, index: usize) -> Option<GroupMember<'_>> {
        self.members().nth(index)
    }

    /// 그룹 식별용 정렬된 경로 목록
    pub fn membership_key(&self) -> Vec<PathBuf> {
        let mut key: Vec<PathBuf> = self.members().map(|m| m.image.path.clone()).collect();
        key.sort();
        key
    }
}
