use tokenize::{classify, tokenize};

fn main() {
    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "私はRustで5年の開発経験があります。".to_string());

    for token in tokenize(&text) {
        let class = token.text.chars().next().map(classify);
        println!("{:>4}..{:<4} {:?} {:?}", token.start, token.end, class, token.text);
    }
}
