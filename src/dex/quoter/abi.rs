// QuoterV2 calldata and return-data codec
use crate::common::{FeeTier, SwapRouterError};
use crate::dex::quoter::types::Quote;
use ethers::abi::{ParamType, Token, decode, encode};
use ethers::types::{Address, Bytes, U256};
use ethers::utils::id;

pub const QUOTE_EXACT_INPUT_SINGLE_SIG: &str =
    "quoteExactInputSingle((address,address,uint256,uint24,uint160))";
pub const QUOTE_EXACT_INPUT_SIG: &str = "quoteExactInput(bytes,uint256)";

pub fn quote_exact_input_single_calldata(
    token_in: Address,
    token_out: Address,
    amount_in: U256,
    fee: FeeTier,
) -> Bytes {
    let params = Token::Tuple(vec![
        Token::Address(token_in),
        Token::Address(token_out),
        Token::Uint(amount_in),
        Token::Uint(U256::from(fee.value())),
        // sqrtPriceLimitX96 = 0: no price limit
        Token::Uint(U256::zero()),
    ]);
    with_selector(QUOTE_EXACT_INPUT_SINGLE_SIG, &[params])
}

pub fn quote_exact_input_calldata(path: &Bytes, amount_in: U256) -> Bytes {
    with_selector(
        QUOTE_EXACT_INPUT_SIG,
        &[Token::Bytes(path.to_vec()), Token::Uint(amount_in)],
    )
}

fn with_selector(signature: &str, args: &[Token]) -> Bytes {
    let mut data = id(signature).to_vec();
    data.extend(encode(args));
    Bytes::from(data)
}

/// `(uint256 amountOut, uint160 sqrtPriceX96After, uint32 initializedTicksCrossed, uint256 gasEstimate)`
pub fn decode_single_quote(data: &[u8]) -> Result<Quote, SwapRouterError> {
    let tokens = decode(
        &[
            ParamType::Uint(256),
            ParamType::Uint(160),
            ParamType::Uint(32),
            ParamType::Uint(256),
        ],
        data,
    )?;

    let [amount_out, sqrt_price, ticks, gas] = tokens.as_slice() else {
        return Err(SwapRouterError::ProviderError(
            "unexpected quoteExactInputSingle return shape".to_string(),
        ));
    };

    Ok(Quote {
        amount_out: as_uint(amount_out)?,
        sqrt_price_x96_after: vec![as_uint(sqrt_price)?],
        initialized_ticks_crossed: vec![as_uint(ticks)?.low_u32()],
        gas_estimate: as_uint(gas)?,
    })
}

/// `(uint256 amountOut, uint160[] sqrtPriceX96AfterList, uint32[] initializedTicksCrossedList, uint256 gasEstimate)`
pub fn decode_path_quote(data: &[u8]) -> Result<Quote, SwapRouterError> {
    let tokens = decode(
        &[
            ParamType::Uint(256),
            ParamType::Array(Box::new(ParamType::Uint(160))),
            ParamType::Array(Box::new(ParamType::Uint(32))),
            ParamType::Uint(256),
        ],
        data,
    )?;

    let [amount_out, sqrt_prices, ticks, gas] = tokens.as_slice() else {
        return Err(SwapRouterError::ProviderError(
            "unexpected quoteExactInput return shape".to_string(),
        ));
    };

    Ok(Quote {
        amount_out: as_uint(amount_out)?,
        sqrt_price_x96_after: as_uint_array(sqrt_prices)?,
        initialized_ticks_crossed: as_uint_array(ticks)?
            .into_iter()
            .map(|t| t.low_u32())
            .collect(),
        gas_estimate: as_uint(gas)?,
    })
}

fn as_uint(token: &Token) -> Result<U256, SwapRouterError> {
    token
        .clone()
        .into_uint()
        .ok_or_else(|| SwapRouterError::ProviderError(format!("expected uint, got {:?}", token)))
}

fn as_uint_array(token: &Token) -> Result<Vec<U256>, SwapRouterError> {
    token
        .clone()
        .into_array()
        .ok_or_else(|| SwapRouterError::ProviderError(format!("expected array, got {:?}", token)))?
        .iter()
        .map(as_uint)
        .collect()
}
