use dialoguer::Input;
use dialoguer::Select;

pub fn choose<T: ToString>(prompt: &str, items: &[T]) -> anyhow::Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .report(false)
        .items(items)
        .default(0)
        .interact()?)
}

pub fn text(prompt: &str) -> anyhow::Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|i: &String| -> Result<(), &str> {
            match i.trim().is_empty() {
                true => Err("Enter a name"),
                false => Ok(()),
            }
        })
        .interact_text()?
        .trim()
        .to_string())
}

pub fn number(prompt: &str, min: usize, max: usize) -> anyhow::Result<usize> {
    Ok(Input::<usize>::new()
        .with_prompt(format!("{} [{}-{}]", prompt, min, max))
        .validate_with(|i: &usize| -> Result<(), String> {
            match (min..=max).contains(i) {
                true => Ok(()),
                false => Err(format!("Sorry, it must be {} to {}", min, max)),
            }
        })
        .interact_text()?)
}
