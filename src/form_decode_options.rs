const DEFAULT_MAX_DATA_BYTES: u64 = 32 * 1024 * 1024;

/// Options for reading a request body before decoding.
#[derive(Debug, Clone)]
pub struct FormDecodeOptions {
    /// The max number of bytes to read from the request body. The whole body must fit in
    /// memory before decoding starts.
    pub max_data_bytes: u64,
}

impl FormDecodeOptions {
    /// Create a default `FormDecodeOptions` instance with a 32 MiB read cap.
    #[inline]
    pub fn new() -> FormDecodeOptions {
        FormDecodeOptions {
            max_data_bytes: DEFAULT_MAX_DATA_BYTES,
        }
    }

    /// Set the max number of bytes to read from the request body.
    #[inline]
    pub fn max_data_bytes(mut self, max_data_bytes: u64) -> FormDecodeOptions {
        self.max_data_bytes = max_data_bytes;
        self
    }
}

impl Default for FormDecodeOptions {
    #[inline]
    fn default() -> Self {
        FormDecodeOptions::new()
    }
}
