//! Connection string redaction.

use regex::Regex;
use std::sync::LazyLock;

/// Connection string keys whose values are credentials.
const SECRET_KEYS: &[&str] = &["AccountKey", "SharedAccessSignature", "SharedAccessKey"];

static SECRET_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    let keys = SECRET_KEYS.join("|");
    Regex::new(&format!(r"(?i)\b({})=([^;]*)", keys)).unwrap()
});

/// Redact credential values in an Azure storage connection string.
///
/// Non-secret segments such as `AccountName` and `EndpointSuffix` are kept so
/// that log lines still identify which account was used.
pub fn mask_connection_string(connection_string: &str) -> String {
    SECRET_SEGMENT
        .replace_all(connection_string, "$1=[REDACTED]")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks_account_key() {
        let cs = "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=Zm9vYmFy==;EndpointSuffix=core.windows.net";
        let masked = mask_connection_string(cs);
        assert!(!masked.contains("Zm9vYmFy"));
        assert!(masked.contains("AccountName=acct"));
        assert!(masked.contains("AccountKey=[REDACTED]"));
    }

    #[test]
    fn masks_sas_token() {
        let cs = "BlobEndpoint=https://acct.blob.core.windows.net;SharedAccessSignature=sv=2022&sig=abc";
        let masked = mask_connection_string(cs);
        assert!(masked.ends_with("SharedAccessSignature=[REDACTED]"));
        assert!(!masked.contains("sig=abc"));
    }

    #[test]
    fn key_match_is_case_insensitive() {
        let masked = mask_connection_string("accountkey=secret;AccountName=a");
        assert_eq!(masked, "accountkey=[REDACTED];AccountName=a");
    }

    #[test]
    fn development_storage_is_unchanged() {
        assert_eq!(
            mask_connection_string("UseDevelopmentStorage=true"),
            "UseDevelopmentStorage=true"
        );
    }
}
