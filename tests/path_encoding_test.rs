use ethers::types::Address;
use uniswap_route_finder::FeeTier;
use uniswap_route_finder::dex::path::{ADDR_SIZE, FEE_SIZE, decode_path, encode_path, num_pools};

fn addr(byte: u8) -> Address {
    Address::from([byte; 20])
}

#[test]
fn test_two_hop_path_layout() {
    let (a, bridge, b) = (addr(0xaa), addr(0xbb), addr(0xcc));
    let path = encode_path(&[a, bridge, b], &[FeeTier::LOW, FeeTier::MEDIUM]).unwrap();

    assert_eq!(path.len(), 20 + 3 + 20 + 3 + 20);
    assert_eq!(&path[..ADDR_SIZE], a.as_bytes());
    // 500 = 0x0001f4
    assert_eq!(&path[20..23], &[0x00u8, 0x01, 0xf4]);
    assert_eq!(&path[23..43], bridge.as_bytes());
    // 3000 = 0x000bb8
    assert_eq!(&path[43..46], &[0x00u8, 0x0b, 0xb8]);
    assert_eq!(&path[46..], b.as_bytes());
    assert_eq!(num_pools(&path), 2);
}

#[test]
fn test_decode_recovers_tokens_and_fees() {
    let tokens = vec![addr(1), addr(2), addr(3)];
    let fees = vec![FeeTier::HIGH, FeeTier::LOW];
    let path = encode_path(&tokens, &fees).unwrap();

    let (decoded_tokens, decoded_fees) = decode_path(&path).unwrap();
    assert_eq!(decoded_tokens, tokens);
    assert_eq!(decoded_fees, fees);
}

#[test]
fn test_max_fee_uses_all_three_bytes() {
    let max = FeeTier::new(0xff_ffff).unwrap();
    let path = encode_path(&[addr(1), addr(2)], &[max]).unwrap();
    assert_eq!(&path[ADDR_SIZE..ADDR_SIZE + FEE_SIZE], &[0xffu8, 0xff, 0xff]);
    assert_eq!(decode_path(&path).unwrap().1, vec![max]);
}

#[test]
fn test_single_token_path_has_no_fee() {
    let path = encode_path(&[addr(7)], &[]).unwrap();
    assert_eq!(path.len(), ADDR_SIZE);
    assert_eq!(num_pools(&path), 0);
    let (tokens, fees) = decode_path(&path).unwrap();
    assert_eq!(tokens, vec![addr(7)]);
    assert!(fees.is_empty());
}

#[test]
fn test_fee_count_mismatch_rejected() {
    assert!(encode_path(&[addr(1), addr(2), addr(3)], &[FeeTier::LOW]).is_err());
    assert!(encode_path(&[], &[]).is_err());
}

#[test]
fn test_malformed_length_rejected() {
    assert!(decode_path(&[0u8; 19]).is_err());
    assert!(decode_path(&[0u8; 42]).is_err());
    assert!(decode_path(&[0u8; 43]).is_err());
    assert!(decode_path(&[0u8; 66]).is_ok());
}
