use crate::dataset::Dataset;
use crate::source::csv_file::read_records;
use crate::source::{DatasetSource, SourceError};

pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/parzzd/ta3/main/house_prices.csv";

/// CSV document fetched with a blocking GET.
///
/// Must not be called from inside an async runtime; fetch before entering
/// one.
#[derive(Debug, Clone)]
pub struct HttpCsvSource {
    pub url: String,
    pub has_header: bool,
}

impl HttpCsvSource {
    pub fn new(url: impl Into<String>, has_header: bool) -> Self {
        Self { url: url.into(), has_header }
    }
}

impl Default for HttpCsvSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_URL, true)
    }
}

impl DatasetSource for HttpCsvSource {
    fn fetch(&self) -> Result<Dataset, SourceError> {
        log::info!("fetching {}", self.url);
        let response = reqwest::blocking::get(&self.url)?.error_for_status()?;
        let body = response.bytes()?;
        let records = read_records(body.as_ref(), self.has_header)?;
        log::info!("read {} records from {}", records.len(), self.url);
        Ok(Dataset::new(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Answer a single request with `status` and `body`, then close.
    fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 512];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        (format!("http://{addr}/house_prices.csv"), handle)
    }

    #[test]
    fn test_fetch_skips_header() {
        let (url, server) = serve_once("200 OK", "size,rooms,price\n100,2,1000\n200,3,2000\n");
        let data = HttpCsvSource::new(url, true).fetch().unwrap();
        server.join().unwrap();

        assert_eq!(data.len(), 2);
        assert_eq!(data[1], Record::new(200., 3., 2000.));
    }

    #[test]
    fn test_error_status() {
        let (url, server) = serve_once("404 Not Found", "");
        let err = HttpCsvSource::new(url, true).fetch().unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, SourceError::Http(_)), "{err}");
    }

    #[test]
    fn test_bad_body_is_parse_error() {
        let (url, server) = serve_once("200 OK", "size,rooms,price\n100,two,1000\n");
        let err = HttpCsvSource::new(url, true).fetch().unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, SourceError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_default_url() {
        let source = HttpCsvSource::default();
        assert_eq!(source.url, DEFAULT_DATA_URL);
        assert!(source.has_header);
    }
}
