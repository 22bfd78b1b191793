/*!

This is the long-form manual for `blt_parser` and `timblt`.

## The BLT format

A BLT file is a sequence of numbers and quoted strings separated by
whitespace. Line breaks carry no meaning, but files are usually written
with one ballot per line:

```text
4 2
-4
3 1 2 0
2 2=3 1 0
1 4 0
1 0
0
"Anna"
"Bob"
"Clara"
"Dan"
"Club committee 2022"
```

The sections are, in order:

1. the number of candidates (`4`) and the number of seats to fill (`2`)
2. the withdrawn candidates, each written as a negative number (`-4`
   withdraws candidate 4). This section is usually empty.
3. the ballots, one per line. The first number is the count: how many
   voters cast this exact ranking. The following numbers are the
   candidates, most preferred first, and a `0` closes the line.
   Candidates joined by `=` are ranked equally: `2=3` means that
   candidates 2 and 3 share the same rank. A ballot with no candidate
   (`1 0`) is an abstention.
4. a line with a single `0`, which closes the list of ballots
5. the names of the candidates between double quotes, in the order of
   their numbers: the first name is candidate 1
6. optionally, the title of the election between double quotes

Quoted strings cannot contain a double quote: there is no escape sequence.

## Errors

Parsing stops at the first error:
- the input ends in the middle of a section, or before all the candidate
  names have been read
- a number was expected and another character was found (for example a
  letter, or a space after `=` or `-`)
- a number is too large
- the input is not valid UTF-8

Errors report the line and the column where they occurred.

The parser only checks the structure of the file. It does not check that
the candidate numbers in the withdrawn list and in the ballots refer to
declared candidates. Such numbers are reported when the names of the
candidates are looked up, for instance with
[`Election::named_ballots`](crate::Election::named_ballots).

## Command line

The `timblt` program reads a BLT file and prints a JSON summary of the election:

```bash
timblt -i election.blt --view named
```

Options:
- `--input` (`-i`): the BLT file, or `-` for the standard input (the default)
- `--out` (`-o`): where to write the summary, a file path or `stdout` (the default)
- `--view`: `numeric` (candidate numbers), `named` (candidate names, the
  default) or `flat` (candidate names, without the groups of equal rankings)
- `--reference` (`-r`): a JSON summary to compare with. The program fails
  if the summaries differ and prints the differences.
- `--config` (`-c`): a JSON file with the same settings. Relative paths are
  interpreted from the directory of the configuration file, and the command
  line options take precedence.
- `--verbose`: print more information about the parsing

Example of configuration file:

```json
{
  "input": "election.blt",
  "output": "summary.json",
  "view": "flat"
}
```

*/
