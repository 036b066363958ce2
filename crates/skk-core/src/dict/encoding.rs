use std::borrow::Cow;

use encoding_rs::{Encoding, EUC_JP};
use serde::Deserialize;
use tracing::{debug, warn};

use super::DictError;

/// Text encoding of a dictionary source. SKK-JISYO files ship as EUC-JP;
/// newer user dictionaries are usually UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum DictEncoding {
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "utf-8")]
    Utf8,
    #[serde(rename = "euc-jp")]
    EucJp,
}

impl DictEncoding {
    pub(super) fn decode<'a>(self, raw: &'a [u8]) -> Result<Cow<'a, str>, DictError> {
        match self {
            DictEncoding::Utf8 => std::str::from_utf8(strip_utf8_bom(raw))
                .map(Cow::Borrowed)
                .map_err(|_| DictError::Decode("UTF-8")),
            DictEncoding::EucJp => Ok(decode_euc_jp(raw)),
            DictEncoding::Auto => Ok(decode_auto(raw)),
        }
    }
}

fn strip_utf8_bom(raw: &[u8]) -> &[u8] {
    raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(raw)
}

fn decode_euc_jp(raw: &[u8]) -> Cow<'_, str> {
    let (cow, had_errors) = EUC_JP.decode_without_bom_handling(raw);
    if had_errors {
        warn!("EUC-JP decode had errors (replacement characters used)");
    }
    cow
}

/// Emacs-style `-*- coding: euc-jp -*-` cookie on the first line.
fn coding_cookie(raw: &[u8]) -> Option<&'static Encoding> {
    let first_line = raw.split(|&b| b == b'\n').next()?;
    let line = String::from_utf8_lossy(first_line).to_ascii_lowercase();
    let (_, rest) = line.split_once("coding:")?;
    let label = rest
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == ';')
        .next()?;
    // Emacs names such as euc-jis-2004 are not WHATWG labels.
    let label = if label.starts_with("euc-") { "euc-jp" } else { label };
    Encoding::for_label(label.as_bytes())
}

fn decode_auto(raw: &[u8]) -> Cow<'_, str> {
    // 1. BOM
    if let Some((enc, bom_len)) = Encoding::for_bom(raw) {
        debug!("Decoded using BOM: {}", enc.name());
        let (cow, had_errors) = enc.decode_without_bom_handling(&raw[bom_len..]);
        if had_errors {
            warn!("Decode had errors (replacement characters used)");
        }
        return cow;
    }

    // 2. Coding cookie
    if let Some(enc) = coding_cookie(raw) {
        debug!("Decoded using coding cookie: {}", enc.name());
        let (cow, had_errors) = enc.decode_without_bom_handling(raw);
        if had_errors {
            warn!("{} decode had errors", enc.name());
        }
        return cow;
    }

    // 3. UTF-8, then the SKK-JISYO default
    match std::str::from_utf8(raw) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            debug!("UTF-8 decode failed, falling back to EUC-JP");
            decode_euc_jp(raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn euc_jp(s: &str) -> Vec<u8> {
        let (bytes, _, had_errors) = EUC_JP.encode(s);
        assert!(!had_errors);
        bytes.into_owned()
    }

    #[test]
    fn auto_detects_utf8() {
        let text = "かんじ /漢字/\n";
        assert_eq!(DictEncoding::Auto.decode(text.as_bytes()).unwrap(), text);
    }

    #[test]
    fn auto_falls_back_to_euc_jp() {
        let raw = euc_jp("かんじ /漢字/\n");
        assert_eq!(DictEncoding::Auto.decode(&raw).unwrap(), "かんじ /漢字/\n");
    }

    #[test]
    fn auto_honours_coding_cookie() {
        let mut raw = b";; -*- mode: fundamental; coding: euc-jis-2004 -*-\n".to_vec();
        raw.extend(euc_jp("あい /愛/\n"));
        let text = DictEncoding::Auto.decode(&raw).unwrap();
        assert!(text.ends_with("あい /愛/\n"));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut raw = b"\xEF\xBB\xBF".to_vec();
        raw.extend("あい /愛/\n".as_bytes());
        assert_eq!(DictEncoding::Auto.decode(&raw).unwrap(), "あい /愛/\n");
        assert_eq!(DictEncoding::Utf8.decode(&raw).unwrap(), "あい /愛/\n");
    }

    #[test]
    fn explicit_utf8_rejects_euc_jp() {
        let raw = euc_jp("かんじ /漢字/\n");
        assert!(matches!(
            DictEncoding::Utf8.decode(&raw),
            Err(DictError::Decode("UTF-8"))
        ));
    }

    #[test]
    fn explicit_euc_jp() {
        let raw = euc_jp("おくr /送/\n");
        assert_eq!(DictEncoding::EucJp.decode(&raw).unwrap(), "おくr /送/\n");
    }
}
