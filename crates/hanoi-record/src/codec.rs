//! Fixed-layout encode/decode for record headers and move entries.
//!
//! Every field is read and written by name at its documented offset as
//! little-endian bytes. Nothing depends on in-memory struct layout.

use std::io::{Read, Write};

use crate::error::RecordError;
use crate::types::{MoveEntry, RecordHeader};
use crate::{HEADER_SIZE, MOVE_ENTRY_SIZE, USERNAME_LEN};

// ── Header offsets ──────────────────────────────────────────────

/// Offset of the checksum field.
pub const CHECKSUM_OFFSET: usize = 0;
/// Offset of the move count field.
pub const MOVE_COUNT_OFFSET: usize = 8;
/// Offset of the rod count field.
pub const ROD_COUNT_OFFSET: usize = 16;
/// Offset of the disk count field.
pub const DISK_COUNT_OFFSET: usize = 20;
/// Offset of the creation timestamp field.
pub const CREATED_AT_OFFSET: usize = 24;
/// Offset of the username field.
pub const USERNAME_OFFSET: usize = 32;

// ── Field helpers ───────────────────────────────────────────────

fn put_u32(buf: &mut [u8], at: usize, v: u32) {
    buf[at..at + 4].copy_from_slice(&v.to_le_bytes());
}

fn put_u64(buf: &mut [u8], at: usize, v: u64) {
    buf[at..at + 8].copy_from_slice(&v.to_le_bytes());
}

fn get_u32(buf: &[u8], at: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[at..at + 4]);
    u32::from_le_bytes(b)
}

fn get_u64(buf: &[u8], at: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&buf[at..at + 8]);
    u64::from_le_bytes(b)
}

// ── Header encode/decode ────────────────────────────────────────

/// Encode a header into its 64-byte on-disk form.
pub fn encode_header(header: &RecordHeader) -> [u8; HEADER_SIZE] {
    let mut buf = [0u8; HEADER_SIZE];
    put_u64(&mut buf, CHECKSUM_OFFSET, header.checksum);
    put_u64(&mut buf, MOVE_COUNT_OFFSET, header.move_count);
    put_u32(&mut buf, ROD_COUNT_OFFSET, header.rod_count);
    put_u32(&mut buf, DISK_COUNT_OFFSET, header.disk_count);
    put_u64(&mut buf, CREATED_AT_OFFSET, header.created_at);
    buf[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_LEN].copy_from_slice(&header.username);
    buf
}

/// Decode a header from its 64-byte on-disk form.
pub fn decode_header(buf: &[u8; HEADER_SIZE]) -> RecordHeader {
    let mut username = [0u8; USERNAME_LEN];
    username.copy_from_slice(&buf[USERNAME_OFFSET..USERNAME_OFFSET + USERNAME_LEN]);
    RecordHeader {
        checksum: get_u64(buf, CHECKSUM_OFFSET),
        move_count: get_u64(buf, MOVE_COUNT_OFFSET),
        rod_count: get_u32(buf, ROD_COUNT_OFFSET),
        disk_count: get_u32(buf, DISK_COUNT_OFFSET),
        created_at: get_u64(buf, CREATED_AT_OFFSET),
        username,
    }
}

/// Read the raw header bytes from a stream.
pub fn read_header_bytes<R: Read + ?Sized>(r: &mut R) -> Result<[u8; HEADER_SIZE], RecordError> {
    let mut buf = [0u8; HEADER_SIZE];
    r.read_exact(&mut buf)?;
    Ok(buf)
}

/// Read and decode a header from a stream.
pub fn read_header<R: Read + ?Sized>(r: &mut R) -> Result<RecordHeader, RecordError> {
    Ok(decode_header(&read_header_bytes(r)?))
}

// ── Snapshot and moves ──────────────────────────────────────────

/// Write a rod-major slot snapshot as consecutive little-endian `u32`s.
pub fn write_snapshot<W: Write + ?Sized>(w: &mut W, slots: &[u32]) -> Result<(), RecordError> {
    let mut buf = Vec::with_capacity(slots.len() * 4);
    for &slot in slots {
        buf.extend_from_slice(&slot.to_le_bytes());
    }
    w.write_all(&buf)?;
    Ok(())
}

/// Read a snapshot of `slot_count` little-endian `u32`s.
pub fn read_snapshot<R: Read + ?Sized>(
    r: &mut R,
    slot_count: usize,
) -> Result<Vec<u32>, RecordError> {
    let mut buf = vec![0u8; slot_count * 4];
    r.read_exact(&mut buf)?;
    Ok(buf.chunks_exact(4).map(|c| get_u32(c, 0)).collect())
}

/// Encode one move entry: `src`, `dst`, `elapsed_millis`.
pub fn encode_move(entry: &MoveEntry) -> [u8; MOVE_ENTRY_SIZE] {
    let mut buf = [0u8; MOVE_ENTRY_SIZE];
    put_u32(&mut buf, 0, entry.src);
    put_u32(&mut buf, 4, entry.dst);
    put_u64(&mut buf, 8, entry.elapsed_millis);
    buf
}

/// Decode one move entry.
pub fn decode_move(buf: &[u8; MOVE_ENTRY_SIZE]) -> MoveEntry {
    MoveEntry {
        src: get_u32(buf, 0),
        dst: get_u32(buf, 4),
        elapsed_millis: get_u64(buf, 8),
    }
}
