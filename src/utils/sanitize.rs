/// 清理上传文件名
///
/// 仅保留 ASCII 字母、数字、`-`、`_` 和 `.`，其余字符替换为 `_`，
/// 防止路径穿越和非法文件名落盘。
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    // 去掉可能残留的前导点，避免隐藏文件或 ".." 片段
    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_safe_characters() {
        assert_eq!(sanitize_file_name("boletim-2026_v2.pdf"), "boletim-2026_v2.pdf");
    }

    #[test]
    fn test_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("certidão nascimento.pdf"), "certid_o_nascimento.pdf");
        assert_eq!(sanitize_file_name("a/b\\c.txt"), "a_b_c.txt");
    }

    #[test]
    fn test_strips_leading_dots() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "_.._etc_passwd");
        assert_eq!(sanitize_file_name(".hidden"), "hidden");
    }

    #[test]
    fn test_empty_name_falls_back() {
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name("..."), "file");
    }
}
