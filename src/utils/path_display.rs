use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 문자열을 최대 너비에 맞춰 중간 생략한다.
pub fn truncate_middle(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    if text.width() <= max_width {
        return text.to_string();
    }

    if max_width < 5 {
        return take_prefix_by_width(text, max_width);
    }

    let side_width = (max_width - ELLIPSIS.width()) / 2;
    let start = take_prefix_by_width(text, side_width);
    let end = take_suffix_by_width(text, side_width);
    format!("{}{}{}", start, ELLIPSIS, end)
}

/// 경로를 최대 너비에 맞춰 축약한다.
///
/// 첫 구성요소와 가능한 많은 뒤쪽 구성요소를 남기고 가운데를 `...`로 생략한다.
/// 구분자는 원본 경로의 것(`/` 또는 `\`)을 그대로 사용한다.
pub fn truncate_path(path: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if path.width() <= max_width {
        return path.to_string();
    }

    let separator = if path.contains('\\') { '\\' } else { '/' };
    let parts: Vec<&str> = path.split(separator).filter(|s| !s.is_empty()).collect();
    if parts.len() <= 2 {
        return truncate_from_start(path, max_width);
    }

    let first = if path.starts_with(separator) {
        format!("{}{}", separator, parts[0])
    } else {
        parts[0].to_string()
    };

    let elided = format!("{}{}", separator, ELLIPSIS);
    let first_width = first.width() + elided.width();
    if first_width >= max_width {
        return truncate_from_start(path, max_width);
    }
    let available_width = max_width - first_width;

    let mut end_parts: Vec<&str> = Vec::new();
    let mut current_width = 0;
    for part in parts.iter().skip(1).rev() {
        let part_width = part.width() + 1;
        if current_width + part_width > available_width {
            break;
        }
        end_parts.insert(0, part);
        current_width += part_width;
    }

    if end_parts.is_empty() {
        return truncate_from_start(path, max_width);
    }

    let sep = separator.to_string();
    format!("{}{}{}{}", first, elided, separator, end_parts.join(&sep))
}

fn truncate_from_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }

    let suffix_width = max_width - ELLIPSIS.width();
    format!("{}{}", ELLIPSIS, take_suffix_by_width(text, suffix_width))
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

fn take_suffix_by_width(text: &str, max_width: usize) -> String {
    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.reverse();
    rev_chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_middle() {
        assert_eq!(truncate_middle("short", 10), "short");
        assert_eq!(truncate_middle("verylongstring", 10), "ver...ing");
        assert_eq!(truncate_middle("verylongstring", 4), "very");
    }

    #[test]
    fn test_truncate_middle_width_bound() {
        let value = "사진사진사진사진사진사진사진";
        assert!(truncate_middle(value, 12).width() <= 12);
    }

    #[test]
    fn test_truncate_path_short() {
        assert_eq!(truncate_path("/photos/a.jpg", 20), "/photos/a.jpg");
    }

    #[test]
    fn test_truncate_path_unix() {
        let path = "/home/user/pictures/2019/summer/beach/day-two/IMG_0001.jpg";
        let truncated = truncate_path(path, 30);
        assert!(truncated.starts_with("/home/.../"));
        assert!(truncated.ends_with("/IMG_0001.jpg"));
        assert!(truncated.width() <= 30);
    }

    #[test]
    fn test_truncate_path_windows() {
        let path = "C:\\Users\\user\\Pictures\\2019\\summer\\beach\\IMG_0001.jpg";
        let truncated = truncate_path(path, 28);
        assert!(truncated.starts_with("C:\\...\\"));
        assert!(truncated.ends_with("\\IMG_0001.jpg"));
        assert!(truncated.width() <= 28);
    }

    #[test]
    fn test_truncate_path_single_component() {
        let truncated = truncate_path("a_really_long_file_name.png", 10);
        assert_eq!(truncated, "...ame.png");
    }
}
