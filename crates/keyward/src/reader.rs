//! The key card reader: decode a card, optionally audit the holder's
//! surroundings, return the identity.
//!
//! # What the audit may and may not do
//!
//! After decoding, the reader can look up the holder's home cell and walk
//! the rooms reachable from it, noting which of them would admit the
//! holder. It does so with shared references only (`&RoomGraph`,
//! `&Room`), so it *cannot* change an allow-list, an id or an edge. The
//! identity returned to the caller is the decoded value itself; nothing
//! gathered during the audit feeds back into it.

use std::sync::Arc;

use keyward_directory::RoomDirectory;
use keyward_protocol::{CardCodec, Identity, ProtocolError, RoomId, TextCardCodec};
use keyward_room::reachable_from;

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for a [`KeyCardReader`].
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Run the neighbourhood audit on every [`KeyCardReader::read`] and
    /// emit it as a `debug` event.
    ///
    /// Default: `true`. The audit is read-only and bounded by the number
    /// of rooms, so turning it off only saves work.
    pub audit: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self { audit: true }
    }
}

// ---------------------------------------------------------------------------
// CardAudit
// ---------------------------------------------------------------------------

/// What the reader learned about a card holder's surroundings.
///
/// Holds room ids only. Other people's names never end up in here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAudit {
    /// The decoded card holder.
    pub holder: Identity,

    /// The holder's home cell, if one is assigned.
    pub cell: Option<RoomId>,

    /// Every room reachable from the cell, ascending. Empty without a cell.
    pub nearby: Vec<RoomId>,

    /// The subset of `nearby` whose allow-list contains the holder.
    pub admitted_nearby: Vec<RoomId>,
}

// ---------------------------------------------------------------------------
// KeyCardReader
// ---------------------------------------------------------------------------

/// Turns card text into an [`Identity`].
///
/// Generic over the [`CardCodec`] so another card format can be swapped
/// in; the default is [`TextCardCodec`] (`first,last`).
#[derive(Debug)]
pub struct KeyCardReader<C: CardCodec = TextCardCodec> {
    directory: Arc<RoomDirectory>,
    codec: C,
    config: ReaderConfig,
}

impl KeyCardReader<TextCardCodec> {
    /// Creates a reader with the text card format and default config.
    pub fn new(directory: Arc<RoomDirectory>) -> Self {
        Self::with_codec(directory, TextCardCodec, ReaderConfig::default())
    }

    /// Creates a reader with the text card format and the given config.
    pub fn with_config(directory: Arc<RoomDirectory>, config: ReaderConfig) -> Self {
        Self::with_codec(directory, TextCardCodec, config)
    }
}

impl<C: CardCodec> KeyCardReader<C> {
    /// Creates a reader with a custom codec.
    pub fn with_codec(directory: Arc<RoomDirectory>, codec: C, config: ReaderConfig) -> Self {
        Self {
            directory,
            codec,
            config,
        }
    }

    /// Decodes `card_data` into the identity it names.
    ///
    /// With [`ReaderConfig::audit`] on, also audits the holder's
    /// neighbourhood and logs a summary at `debug` level. The audit never
    /// changes the returned value.
    ///
    /// # Errors
    /// Returns a [`ProtocolError`] if the card text is malformed.
    pub fn read(&self, card_data: &str) -> Result<Identity, ProtocolError> {
        let identity = self.codec.decode(card_data)?;

        if self.config.audit {
            let audit = self.audit(&identity);
            tracing::debug!(
                cell = ?audit.cell,
                nearby = audit.nearby.len(),
                admitted_nearby = audit.admitted_nearby.len(),
                "card audited"
            );
        }

        Ok(identity)
    }

    /// Decodes `card_data` and returns the audit alongside the identity,
    /// whatever [`ReaderConfig::audit`] says.
    ///
    /// # Errors
    /// Returns a [`ProtocolError`] if the card text is malformed.
    pub fn inspect(&self, card_data: &str) -> Result<(Identity, CardAudit), ProtocolError> {
        let identity = self.codec.decode(card_data)?;
        let audit = self.audit(&identity);
        Ok((identity, audit))
    }

    /// The codec this reader decodes with.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// The directory this reader audits against.
    pub fn directory(&self) -> &Arc<RoomDirectory> {
        &self.directory
    }

    fn audit(&self, identity: &Identity) -> CardAudit {
        let cell = self.directory.cell_for(identity);
        let nearby = reachable_from(self.directory.graph(), cell);

        let admitted_nearby = nearby
            .values()
            .filter(|room| room.allows_entrance(identity))
            .map(|room| room.id())
            .collect();

        CardAudit {
            holder: identity.clone(),
            cell: cell.map(|room| room.id()),
            nearby: nearby.keys().copied().collect(),
            admitted_nearby,
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
