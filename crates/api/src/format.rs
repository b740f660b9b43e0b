// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use num_traits::cast::ToPrimitive;

/// Formats a money amount rounded to the nearest whole unit with `,`
/// grouping thousands, e.g. `1234567.5` becomes `"1,234,568"`.
///
/// Values that do not fit an integer (NaN, infinities) are printed as is.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    let Some(whole) = amount.round().to_i128() else {
        return amount.to_string();
    };

    let digits: String = whole.unsigned_abs().to_string();
    let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
