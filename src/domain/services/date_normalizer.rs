//! # Date/Time Normalizer
//!
//! Teamwork エクスポートの日付表記（`DD/MM/YYYY HH:MM`）を
//! olmonoko が受け付ける `YYYY-MM-DDTHH:MM` 形式に変換する

use chrono::NaiveTime;

use crate::domain::errors::ImportError;

/// `DD/MM/YYYY` を `YYYY-MM-DD` に並べ替える
///
/// 固定幅の書式チェックのみを行い、暦としての妥当性は検証しない
/// （`31/02/2024` は `2024-02-31` になる）。
///
/// # 例
///
/// ```
/// use teamwork_import::domain::services::date_normalizer::csv_date_to_rfc_date;
///
/// assert_eq!(csv_date_to_rfc_date("29/04/2024").unwrap(), "2024-04-29");
/// assert!(csv_date_to_rfc_date("2024-04-29").is_err());
/// ```
pub fn csv_date_to_rfc_date(date: &str) -> Result<String, ImportError> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 {
        return Err(ImportError::InvalidDate(date.to_string()));
    }

    let well_formed = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'/',
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(ImportError::InvalidDate(date.to_string()));
    }

    // ASCII のみなのでバイト境界でスライスしてよい
    Ok(format!("{}-{}-{}", &date[6..10], &date[3..5], &date[0..2]))
}

/// 日時文字列を最初の空白で日付部と時刻部に分割する
pub fn split_datetime(datetime: &str) -> Result<(&str, &str), ImportError> {
    datetime
        .split_once(' ')
        .ok_or_else(|| ImportError::InvalidDateTime(datetime.to_string()))
}

/// 時刻を検証し、ゼロ埋めの `HH:MM` にする
pub fn normalize_time(time: &str) -> Result<String, ImportError> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| ImportError::InvalidTime(time.to_string()))
}

/// `29/04/2024 16:11` を `2024-04-29T16:11` に変換する
pub fn csv_datetime_to_starts_at(datetime: &str) -> Result<String, ImportError> {
    let (date, time) = split_datetime(datetime)?;
    let date = csv_date_to_rfc_date(date)?;
    let time = normalize_time(time)?;
    Ok(format!("{}T{}", date, time))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_date_to_rfc_date() {
        assert_eq!(csv_date_to_rfc_date("29/04/2024").unwrap(), "2024-04-29");
        assert_eq!(csv_date_to_rfc_date("01/12/1999").unwrap(), "1999-12-01");
    }

    #[test]
    fn test_csv_date_is_not_calendar_validated() {
        assert_eq!(csv_date_to_rfc_date("31/02/2024").unwrap(), "2024-02-31");
        assert_eq!(csv_date_to_rfc_date("00/13/2024").unwrap(), "2024-13-00");
    }

    #[test]
    fn test_csv_date_wrong_length() {
        assert_eq!(
            csv_date_to_rfc_date("9/04/2024"),
            Err(ImportError::InvalidDate("9/04/2024".to_string()))
        );
        assert!(csv_date_to_rfc_date("").is_err());
        assert!(csv_date_to_rfc_date("29/04/20245").is_err());
    }

    #[test]
    fn test_csv_date_wrong_separators() {
        assert!(csv_date_to_rfc_date("29-04-2024").is_err());
        assert!(csv_date_to_rfc_date("2024/04/29").is_err());
        assert!(csv_date_to_rfc_date("ab/cd/efgh").is_err());
    }

    #[test]
    fn test_csv_date_multibyte_input_rejected() {
        // 10バイトだが ASCII ではない
        assert!(csv_date_to_rfc_date("29/04/2ä4").is_err());
    }

    #[test]
    fn test_split_datetime() {
        assert_eq!(
            split_datetime("29/04/2024 16:11").unwrap(),
            ("29/04/2024", "16:11")
        );
        assert!(matches!(
            split_datetime("29/04/2024"),
            Err(ImportError::InvalidDateTime(_))
        ));
    }

    #[test]
    fn test_normalize_time_pads_hour() {
        assert_eq!(normalize_time("9:05").unwrap(), "09:05");
        assert_eq!(normalize_time("16:11").unwrap(), "16:11");
    }

    #[test]
    fn test_normalize_time_invalid() {
        assert!(matches!(
            normalize_time("25:00"),
            Err(ImportError::InvalidTime(_))
        ));
        assert!(normalize_time("noon").is_err());
    }

    #[test]
    fn test_csv_datetime_to_starts_at() {
        assert_eq!(
            csv_datetime_to_starts_at("29/04/2024 16:11").unwrap(),
            "2024-04-29T16:11"
        );
    }

    #[test]
    fn test_csv_datetime_to_starts_at_bad_date() {
        assert!(matches!(
            csv_datetime_to_starts_at("2024-04-29 16:11"),
            Err(ImportError::InvalidDate(_))
        ));
    }
}
