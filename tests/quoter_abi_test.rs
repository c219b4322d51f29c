use ethers::abi::{Token as AbiToken, encode};
use ethers::types::{Address, U256};
use ethers::utils::id;
use uniswap_route_finder::dex::quoter::abi::{
    QUOTE_EXACT_INPUT_SIG, QUOTE_EXACT_INPUT_SINGLE_SIG, decode_path_quote, decode_single_quote,
    quote_exact_input_calldata, quote_exact_input_single_calldata,
};
use uniswap_route_finder::{FeeTier, encode_path};

#[test]
fn test_single_calldata_layout() {
    let token_in = Address::from([0x11; 20]);
    let token_out = Address::from([0x22; 20]);
    let data =
        quote_exact_input_single_calldata(token_in, token_out, U256::from(1_000_000u64), FeeTier::MEDIUM);

    // selector + five static words
    assert_eq!(data.len(), 4 + 5 * 32);
    assert_eq!(&data[..4], &id(QUOTE_EXACT_INPUT_SINGLE_SIG));
    assert_eq!(&data[4 + 12..4 + 32], token_in.as_bytes());
    assert_eq!(&data[36 + 12..36 + 32], token_out.as_bytes());
    assert_eq!(U256::from_big_endian(&data[68..100]), U256::from(1_000_000u64));
    assert_eq!(U256::from_big_endian(&data[100..132]), U256::from(3000u64));
    assert_eq!(U256::from_big_endian(&data[132..164]), U256::zero());
}

#[test]
fn test_path_calldata_layout() {
    let path = encode_path(
        &[
            Address::from([1; 20]),
            Address::from([2; 20]),
            Address::from([3; 20]),
        ],
        &[FeeTier::LOW, FeeTier::HIGH],
    )
    .unwrap();
    let data = quote_exact_input_calldata(&path, U256::from(42u64));

    assert_eq!(&data[..4], &id(QUOTE_EXACT_INPUT_SIG));
    // offset, amount, length, 66 bytes padded to 96
    assert_eq!(data.len(), 4 + 32 + 32 + 32 + 96);
    assert_eq!(U256::from_big_endian(&data[4..36]), U256::from(64u64));
    assert_eq!(U256::from_big_endian(&data[36..68]), U256::from(42u64));
    assert_eq!(U256::from_big_endian(&data[68..100]), U256::from(66u64));
    assert_eq!(&data[100..166], &path[..]);
}

#[test]
fn test_decode_single_quote_return() {
    let ret = encode(&[
        AbiToken::Uint(U256::from(500_000u64)),
        AbiToken::Uint(U256::from(1u128 << 100)),
        AbiToken::Uint(U256::from(2u64)),
        AbiToken::Uint(U256::from(90_000u64)),
    ]);

    let quote = decode_single_quote(&ret).unwrap();
    assert_eq!(quote.amount_out, U256::from(500_000u64));
    assert_eq!(quote.sqrt_price_x96_after, vec![U256::from(1u128 << 100)]);
    assert_eq!(quote.initialized_ticks_crossed, vec![2]);
    assert_eq!(quote.gas_estimate, U256::from(90_000u64));
}

#[test]
fn test_decode_path_quote_return() {
    let ret = encode(&[
        AbiToken::Uint(U256::from(950_000u64)),
        AbiToken::Array(vec![
            AbiToken::Uint(U256::from(1u64)),
            AbiToken::Uint(U256::from(2u64)),
        ]),
        AbiToken::Array(vec![AbiToken::Uint(U256::from(3u64)), AbiToken::Uint(U256::from(4u64))]),
        AbiToken::Uint(U256::from(180_000u64)),
    ]);

    let quote = decode_path_quote(&ret).unwrap();
    assert_eq!(quote.amount_out, U256::from(950_000u64));
    assert_eq!(quote.sqrt_price_x96_after, vec![U256::from(1u64), U256::from(2u64)]);
    assert_eq!(quote.initialized_ticks_crossed, vec![3, 4]);
    assert_eq!(quote.gas_estimate, U256::from(180_000u64));
}

#[test]
fn test_empty_return_data_is_an_error() {
    let err = decode_single_quote(&[]).unwrap_err();
    assert!(!err.is_revert());
}
