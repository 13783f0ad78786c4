/// The transport shim emitted verbatim alongside every generated client.
///
/// Generated functions call `httpClient.request`, which forwards to
/// whatever transport the caller injected via `initApiClient`. Generated
/// code never compiles against a concrete HTTP library.
pub fn emit_shim() -> String {
    include_str!("../../templates/httpClient.ts").to_string()
}

/// File name the shim is written to, and which the generated client
/// imports from.
pub const SHIM_FILE_NAME: &str = "httpClient.ts";
