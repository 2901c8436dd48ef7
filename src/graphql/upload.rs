use std::path::Path;

use crate::errors::ClientError;

/// A file sent with the GraphQL multipart request protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a travel history export from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ClientError::InvalidArgument(format!("{} has no file name", path.display()))
            })?
            .to_string();

        Ok(Self::new(file_name.clone(), content_type_for(&file_name), bytes))
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => "text/csv",
        Some("json") => "application/json",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("history.CSV"), "text/csv");
        assert_eq!(content_type_for("export.pdf"), "application/pdf");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path() {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(file, "Datum;Check-in").unwrap();

        let upload = Upload::from_path(file.path()).await.unwrap();

        assert!(upload.file_name.ends_with(".csv"));
        assert_eq!(upload.content_type, "text/csv");
        assert_eq!(upload.bytes, b"Datum;Check-in");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let result = Upload::from_path("/definitely/not/here.csv").await;
        assert!(matches!(result, Err(ClientError::Io(_))));
    }
}
