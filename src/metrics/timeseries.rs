//calculates simple period-over-period returns from a value series
//the first date has no prior observation, so the result is one element shorter
pub fn calculate_returns(values: &[f64]) -> Vec<f64> {
    if values.len() < 2 {
        return vec![];
    }

    let mut returns = Vec::with_capacity(values.len() - 1);
    for window in values.windows(2) {
        returns.push(window[1] / window[0] - 1.0);
    }
    returns
}

//calculates maximum drawdown: the most negative value of
//(value / running_max) - 1 over the series, always <= 0
pub fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::MIN;
    let mut max_dd = 0.0f64;

    for &value in values {
        if value > peak {
            peak = value;
        }
        let drawdown = value / peak - 1.0;
        if drawdown < max_dd {
            max_dd = drawdown;
        }
    }

    max_dd
}
