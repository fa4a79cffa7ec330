/// Tags what an operation is for, as far as the transport is concerned.
///
/// The role is fixed when the descriptor is built. Links decide how to treat
/// an outgoing operation by looking at this tag and never at the operation's
/// text or field names.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationRole {
    /// An ordinary operation that runs with the caller's access token.
    #[default]
    Standard,

    /// Exchanges a refresh token for a new credential pair. It must go out
    /// without an `authorization` header, otherwise an expired access token
    /// would make the refresh itself fail.
    CredentialRefresh,
}
