mod common;

use axml_strings::chunk::{CHUNK_RESOURCE_TABLE, CHUNK_STRING_POOL, CHUNK_XML};
use axml_strings::*;
use common::{PoolBuilder, wrap_chunk};

#[test]
fn parse_chunk() {
    let data = PoolBuilder::utf8().string("manifest").string("package").chunk();
    let pool = StringPool::parse_chunk(&data).unwrap();
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.get(1).unwrap(), "package");
}

#[test]
fn parse_chunk_ignores_trailing_bytes() {
    let mut data = PoolBuilder::utf16().string("x").chunk();
    let len = data.len();
    data.extend_from_slice(&[0xFF; 16]);
    let pool = StringPool::parse_chunk(&data).unwrap();
    // Data region ends at the chunk boundary.
    assert_eq!(pool.data_len(), len - 8 - 24);
}

#[test]
fn parse_chunk_wrong_type() {
    let body = PoolBuilder::utf8().string("x").body();
    let data = wrap_chunk(CHUNK_XML, 8, &body);
    assert_eq!(
        StringPool::parse_chunk(&data).unwrap_err(),
        ParseError::InvalidChunkType {
            found: CHUNK_XML,
            expected: CHUNK_STRING_POOL,
        }
    );
}

#[test]
fn parse_chunk_truncated() {
    let data = PoolBuilder::utf8().string("truncated").chunk();
    assert!(matches!(
        StringPool::parse_chunk(&data[..data.len() - 1]),
        Err(ParseError::Truncated { what: "chunk body", .. })
    ));
}

#[test]
fn locate_pool_in_xml_document() {
    let pool_chunk = PoolBuilder::utf16().string("activity").chunk();
    let doc = wrap_chunk(CHUNK_XML, 8, &pool_chunk);

    let offset = find_string_pool(&doc).unwrap();
    assert_eq!(offset, 8);
    let pool = StringPool::parse_chunk(&doc[offset..]).unwrap();
    assert_eq!(pool.get(0).unwrap(), "activity");
}

#[test]
fn locate_pool_in_resource_table() {
    let pool_chunk = PoolBuilder::utf8().string("app_name").chunk();
    let mut body = 1u32.to_le_bytes().to_vec();
    body.extend_from_slice(&pool_chunk);
    let table = wrap_chunk(CHUNK_RESOURCE_TABLE, 12, &body);

    let offset = find_string_pool(&table).unwrap();
    assert_eq!(offset, 12);
    let pool = StringPool::parse_chunk(&table[offset..]).unwrap();
    assert_eq!(pool.get(0).unwrap(), "app_name");
}

#[test]
fn locate_bare_pool() {
    let data = PoolBuilder::utf8().string("bare").chunk();
    assert_eq!(find_string_pool(&data).unwrap(), 0);
}
