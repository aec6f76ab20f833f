use algebra::{Equation, Expression, Fraction, Solution, Variable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let x = Variable::named("x");
    let y = Variable::named("y");

    let equations = vec![
        Equation::new(Fraction::from(2) * x.clone() + 3, 7),
        Equation::new(
            Fraction::from(2) * x.clone() + 5,
            Fraction::from(1) * x.clone() + 10,
        ),
        Equation::new(
            Expression::from(Fraction::from(2) * x.clone()),
            Fraction::from(1) * y + 4,
        ),
    ];

    for equation in &equations {
        match equation.solve_for("x")? {
            Solution::Value(value) => {
                println!("{}  =>  x = {}", equation, value)
            },
            Solution::Partial(expression) => {
                println!("{}  =>  x = {}", equation, expression)
            },
        }
    }

    Ok(())
}
