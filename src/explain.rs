/// Plain-text primer on where an option's price comes from, shown next to the
/// chart.
pub const EXPLANATION: &str = "\
How option prices derive their value from the underlying stock

An option gives its holder the right, but not the obligation, to buy (call) or
sell (put) a stock at a fixed strike price before or at expiry. Its price
depends on the stock price, the strike, the time left, the stock's volatility
and the prevailing interest rate.

Intrinsic value
  Call: max(S - K, 0). A call struck at 100 on a stock at 120 is worth at
  least 20. Put: max(K - S, 0). A put struck at 100 on a stock at 80 is worth
  at least 20. Options with intrinsic value are in the money; the others are
  out of the money and are priced entirely from the factors below.

Time value
  Before expiry the stock can still move in the holder's favour, so an option
  is worth more than its intrinsic value. The longer the time to expiry, the
  larger this premium. It decays as expiry approaches and is gone at expiry.

Volatility
  Larger expected swings raise the chance of finishing deep in the money, so
  higher volatility raises both call and put prices.

Risk-free rate
  A higher rate lowers the present value of the strike: calls become more
  expensive and puts cheaper. The effect is smaller than that of the stock
  price or volatility.

Probability
  The Black-Scholes price weighs the possible outcomes by their likelihood,
  which depends on how far the stock is from the strike, how volatile it is
  and how much time remains.

Leverage
  An option controls the same exposure for less capital than the stock, so its
  price moves by a larger percentage than the stock price does.
";
